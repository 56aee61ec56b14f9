//! Console texts. All of them go to the writer handed in by the caller.

use std::io::{self, Write};

use reqwest::StatusCode;

pub fn missing_token(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "❌ JWT_TOKEN environment variable is not set")?;
    writeln!(out)?;
    writeln!(out, "To set up the JWT token:")?;
    writeln!(out, "1. Login to Go IAM web interface")?;
    writeln!(out, "2. Open browser Developer Tools")?;
    writeln!(out, "3. Go to Application/Storage tab")?;
    writeln!(out, "4. Find 'access_token' in Local Storage")?;
    writeln!(out, "5. Copy the token value")?;
    writeln!(
        out,
        "6. Set the environment variable: export JWT_TOKEN=your_actual_token"
    )?;
    writeln!(out, "7. Or create a .env file with: JWT_TOKEN=your_actual_token")
}

pub fn testing(out: &mut impl Write, server_url: &str) -> io::Result<()> {
    writeln!(out, "🚀 Testing Go IAM server at {server_url}...")
}

pub fn failed(
    out: &mut impl Write,
    status: StatusCode,
    server_url: &str,
    iam_url: &str,
) -> io::Result<()> {
    // StatusCode's Display is "<code> <reason>".
    writeln!(out, "❌ Request failed with status: {status}")?;

    if status == StatusCode::UNAUTHORIZED {
        writeln!(out)?;
        writeln!(out, "Troubleshooting tips:")?;
        writeln!(out, "• Check that your JWT token is valid and not expired")?;
        writeln!(out, "• Verify the Go IAM server is running on {iam_url}")?;
        writeln!(out, "• Ensure the example server is running on {server_url}")?;
    }
    Ok(())
}

pub fn succeeded(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "✅ Request successful!")
}

/// Writes the body bytes untouched, even when they are not UTF-8.
pub fn response_body(out: &mut impl Write, body: &[u8]) -> io::Result<()> {
    out.write_all(b"Response: ")?;
    out.write_all(body)?;
    writeln!(out)
}
