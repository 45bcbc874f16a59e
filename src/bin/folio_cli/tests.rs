#![deny(clippy::all, clippy::pedantic)]

use httpmock::MockServer;
use tempfile::NamedTempFile;
use uuid::Uuid;

use folio::client::ApiClient;

use crate::args::{AboutCmd, LanguageArg, PostsCmd, PrefsCmd, ProjectsCmd, ThemeArg};
use crate::error::CliError;
use crate::handlers::{about, posts, prefs, projects};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url()).expect("client")
}

fn tmp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    std::io::Write::write_all(&mut file, contents.as_bytes()).expect("write tmp");
    file
}

#[test]
fn read_value_prefers_file_over_inline() -> Result<(), CliError> {
    let file = tmp_file("from-file");
    let val = crate::io::read_value(Some("inline".into()), Some(file.path().to_path_buf()))?;
    assert_eq!(val, "from-file");
    Ok(())
}

#[test]
fn read_value_requires_some_source() {
    let err = crate::io::read_value(None, None).expect_err("missing value should fail");
    assert!(matches!(err, CliError::InvalidInput(_)));
}

#[tokio::test]
async fn posts_list_hits_endpoint() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/posts/");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    posts::handle(&client(&server), PostsCmd::List).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn posts_comment_reads_content_file() -> Result<(), CliError> {
    let server = MockServer::start();
    let uuid = Uuid::new_v4();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path(format!("/api/posts/{uuid}/comments/"))
            .json_body(serde_json::json!({ "content": "from-file" }));
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"id":1,"content":"from-file","created_at":"2024-05-01T10:30:00Z"}"#);
    });

    let file = tmp_file("from-file");
    posts::handle(
        &client(&server),
        PostsCmd::Comment {
            uuid,
            content: Some("inline".into()),
            content_file: Some(file.path().to_path_buf()),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn posts_comment_rejects_blank_without_network() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path_includes("/comments/");
        then.status(201).body("{}");
    });

    let err = posts::handle(
        &client(&server),
        PostsCmd::Comment {
            uuid: Uuid::new_v4(),
            content: Some("   \n".into()),
            content_file: None,
        },
    )
    .await
    .expect_err("blank comment should fail");
    assert!(matches!(err, CliError::InvalidInput(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn projects_like_hits_endpoint() -> Result<(), CliError> {
    let server = MockServer::start();
    let uuid = Uuid::new_v4();
    let mock = server.mock(|when, then| {
        when.method("POST").path(format!("/api/projects/{uuid}/like/"));
        then.status(204);
    });

    projects::handle(&client(&server), ProjectsCmd::Like { uuid }).await?;
    mock.assert();
    Ok(())
}

#[test]
fn prefs_set_persists_across_commands() -> Result<(), CliError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs.toml");

    prefs::handle(
        path.clone(),
        PrefsCmd::SetLanguage {
            language: LanguageArg::Ru,
        },
    )?;
    prefs::handle(path.clone(), PrefsCmd::SetTheme { theme: ThemeArg::Dark })?;
    prefs::handle(path.clone(), PrefsCmd::Show)?;

    let store = folio::prefs::PrefsStore::load(&path);
    assert_eq!(store.language(), folio::prefs::Language::Ru);
    assert_eq!(store.theme(), folio::prefs::Theme::Dark);
    Ok(())
}

#[tokio::test]
async fn about_skills_hits_endpoint() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/about-me/skills/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1,"name":"Rust","image_url":null,"experience_years":3.5,"proficiency":90}]"#);
    });

    about::handle(&client(&server), AboutCmd::Skills).await?;
    mock.assert();
    Ok(())
}
