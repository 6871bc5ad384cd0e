//! Server-rendered pages
//!
//! Every dynamic value goes through [`escape`] before it reaches markup.

use kernel::html::escape;

use crate::domain::entity::user::UserRecord;
use crate::presentation::dto::LoginNotice;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";

fn page(title: &str, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <link href="{BOOTSTRAP_CSS}" rel="stylesheet" />
  <style>{style}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

/// Anonymous home page
pub fn login(notice: Option<LoginNotice>) -> String {
    let notice = notice
        .map(|n| {
            format!(
                r#"<div class="alert alert-warning" role="alert">{}</div>"#,
                escape(&n.message())
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"  <div class="card text-center" style="width: 400px;">
    {notice}
    <h2 class="mb-4">Welcome</h2>
    <p class="text-muted mb-4">Login with your preferred method</p>
    <a href="/auth/google" class="btn btn-danger login-btn w-100">
      <img src="https://img.icons8.com/color/24/google-logo.png" alt=""> Login with Google
    </a>
  </div>"#
    );

    page(
        "Login",
        "body { display: flex; justify-content: center; align-items: center; height: 100vh; background: #f8f9fa; }
    .card { border-radius: 20px; padding: 40px; box-shadow: 0 8px 25px rgba(0,0,0,0.1); }
    .login-btn { border-radius: 50px; padding: 12px; font-size: 1.1rem; margin-bottom: 15px; }",
        &body,
    )
}

/// Authenticated home page
pub fn greeting(user: &UserRecord) -> String {
    let body = format!(
        r#"  <div class="container py-5">
    <h1>Hello {name}</h1>
    <p><a href="/profile">Profile</a></p>
    <p><a href="/logout">Logout</a></p>
  </div>"#,
        name = escape(&user.display_name),
    );

    page("Home", "", &body)
}

/// Profile card
pub fn profile(user: &UserRecord, placeholder_photo_url: &str) -> String {
    let emails = if user.emails.is_empty() {
        "No email".to_string()
    } else {
        user.emails
            .iter()
            .map(|e| escape(e))
            .collect::<Vec<_>>()
            .join("<br>")
    };

    let body = format!(
        r#"  <div class="profile-card">
    <img src="{photo}" class="profile-img" alt="" />
    <h3>{name}</h3>
    <p class="text-muted">{provider} Login</p>
    <hr>
    <p><strong>Email:</strong><br>
    {emails}</p>
    <a href="/logout" class="btn btn-dark w-100 mt-3">Logout</a>
  </div>"#,
        photo = escape(user.avatar_url(placeholder_photo_url)),
        name = escape(&user.display_name),
        provider = user.provider.as_str().to_uppercase(),
    );

    page(
        "Profile",
        "body { background: #f0f2f5; padding-top: 50px; }
    .profile-card { max-width: 450px; margin: auto; padding: 30px; border-radius: 20px; background: white; text-align: center; box-shadow: 0 5px 25px rgba(0,0,0,0.1); }
    .profile-img { width: 120px; height: 120px; border-radius: 50%; object-fit: cover; margin-bottom: 20px; border: 4px solid #ddd; }",
        &body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::ProviderProfile;
    use crate::domain::value_object::provider_name::ProviderName;
    use serde_json::json;

    fn user(name: &str, emails: Vec<&str>) -> UserRecord {
        UserRecord::from_profile(
            ProviderName::Google,
            ProviderProfile {
                external_id: "1".to_string(),
                display_name: name.to_string(),
                emails: emails.into_iter().map(str::to_string).collect(),
                photos: vec![],
                raw: json!({}),
            },
        )
    }

    #[test]
    fn test_login_has_provider_link() {
        let html = login(None);
        assert!(html.contains(r#"href="/auth/google""#));
        assert!(html.contains("Login with Google"));
        assert!(!html.contains("alert"));
    }

    #[test]
    fn test_login_notice() {
        let html = login(Some(LoginNotice::Cancelled(ProviderName::Google)));
        assert!(html.contains("Google sign-in was cancelled."));
    }

    #[test]
    fn test_profile_emails_joined() {
        let html = profile(&user("Ada", vec!["a@x.io", "b@x.io"]), "https://p/150");
        assert!(html.contains("a@x.io<br>b@x.io"));
        assert!(html.contains("GOOGLE Login"));
        assert!(html.contains(r#"src="https://p/150""#));
    }

    #[test]
    fn test_profile_without_email() {
        let html = profile(&user("Ada", vec![]), "https://p/150");
        assert!(html.contains("No email"));
    }

    #[test]
    fn test_display_name_escaped() {
        let u = user("<script>alert(1)</script>", vec![]);
        assert!(!greeting(&u).contains("<script>"));
        assert!(!profile(&u, "https://p/150").contains("<script>"));
        assert!(greeting(&u).contains("&lt;script&gt;"));
    }
}
