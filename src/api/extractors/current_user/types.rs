/*
 * Responsibility
 * - handler から見える「認証済みユーザー」の型
 * - middleware が Go IAM で解決して request extensions に格納し、handler はこの型だけを受け取る
 */
use goiam::User;

/// User resolved for the current request. Lives only as long as the request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    user: User,
}

impl CurrentUser {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn into_user(self) -> User {
        self.user
    }
}
