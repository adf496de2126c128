//! Endpoint wrappers: paths, methods and exact request bodies

mod support;

use ghrest::github::{
    FileUpdate, IssueListParams, IssueUpdate, Listing, LockReason, MergeMethod, MergeOptions,
    NewIssue, NewPullRequest, NewRepository, State, StateFilter, TrendingQuery, TrendingWindow,
    WorkflowId, WorkflowRunListParams,
};
use mockito::{Matcher, Server};
use serde_json::json;
use support::client_for;

#[tokio::test]
async fn test_create_issue_sends_only_set_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/repos/o/r/issues")
        .match_body(Matcher::Json(json!({
            "title": "Crash on start",
            "body": "Steps to reproduce",
            "labels": ["bug"]
        })))
        .with_status(201)
        .with_body(r#"{"number": 12, "title": "Crash on start"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let issue = NewIssue::new("Crash on start")
        .with_body("Steps to reproduce")
        .with_labels(vec!["bug".to_string()]);
    let created = client.create_issue("o", "r", &issue).await.unwrap();

    assert_eq!(created["number"], 12);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_close_issue_patches_state() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/repos/o/r/issues/12")
        .match_body(Matcher::Json(json!({"state": "closed"})))
        .with_status(200)
        .with_body(r#"{"number": 12, "state": "closed"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let update = IssueUpdate {
        state: Some(State::Closed),
        ..IssueUpdate::default()
    };
    let issue = client.update_issue("o", "r", 12, &update).await.unwrap();

    assert_eq!(issue["state"], "closed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_issues_sends_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/o/r/issues")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("state".into(), "all".into()),
            Matcher::UrlEncoded("labels".into(), "bug,ui".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"number": 1}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let params = IssueListParams {
        state: Some(StateFilter::All),
        labels: Some("bug,ui".to_string()),
        ..IssueListParams::default()
    };
    let issues = client
        .list_issues("o", "r", &params, Listing::Page { page: 2, per_page: 5 })
        .await
        .unwrap();

    assert_eq!(issues.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_lock_issue_with_reason() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/repos/o/r/issues/3/lock")
        .match_body(Matcher::Json(json!({"lock_reason": "too heated"})))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .lock_issue("o", "r", 3, Some(LockReason::TooHeated))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_assignees_and_comments() {
    let mut server = Server::new_async().await;
    let assign = server
        .mock("POST", "/repos/o/r/issues/3/assignees")
        .match_body(Matcher::Json(json!({"assignees": ["alice", "bob"]})))
        .with_status(201)
        .with_body(r#"{"number": 3}"#)
        .create_async()
        .await;
    let comment = server
        .mock("POST", "/repos/o/r/issues/3/comments")
        .match_body(Matcher::Json(json!({"body": "Thanks!"})))
        .with_status(201)
        .with_body(r#"{"id": 99, "body": "Thanks!"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/repos/o/r/issues/comments/99")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .add_assignees("o", "r", 3, &["alice", "bob"])
        .await
        .unwrap();
    let created = client
        .create_issue_comment("o", "r", 3, "Thanks!")
        .await
        .unwrap();
    client.delete_issue_comment("o", "r", 99).await.unwrap();

    assert_eq!(created["id"], 99);
    assign.assert_async().await;
    comment.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_create_draft_pull_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/repos/o/r/pulls")
        .match_body(Matcher::Json(json!({
            "title": "Add feature",
            "head": "feature",
            "base": "main",
            "draft": true
        })))
        .with_status(201)
        .with_body(r#"{"number": 5, "html_url": "https://github.com/o/r/pull/5"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let pull = NewPullRequest::new("Add feature", "feature", "main").as_draft();
    let created = client.create_pull_request("o", "r", &pull).await.unwrap();

    assert_eq!(created["number"], 5);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_merge_pull_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/repos/o/r/pulls/5/merge")
        .match_body(Matcher::Json(json!({"merge_method": "squash"})))
        .with_status(200)
        .with_body(r#"{"merged": true, "sha": "abc"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let options = MergeOptions {
        merge_method: Some(MergeMethod::Squash),
        ..MergeOptions::default()
    };
    let result = client
        .merge_pull_request("o", "r", 5, &options)
        .await
        .unwrap();

    assert_eq!(result["merged"], true);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_is_pull_request_merged() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/o/r/pulls/5/merge")
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("GET", "/repos/o/r/pulls/6/merge")
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.is_pull_request_merged("o", "r", 5).await.unwrap());
    assert!(!client.is_pull_request_merged("o", "r", 6).await.unwrap());
}

#[tokio::test]
async fn test_create_org_repository() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/orgs/acme/repos")
        .match_body(Matcher::Json(json!({
            "name": "widgets",
            "private": true,
            "auto_init": true
        })))
        .with_status(201)
        .with_body(r#"{"full_name": "acme/widgets"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let repo = NewRepository::new("widgets").private(true).auto_init();
    let created = client
        .create_repository(Some("acme"), &repo)
        .await
        .unwrap();

    assert_eq!(created["full_name"], "acme/widgets");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_repository_topics() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/o/r/topics")
        .with_status(200)
        .with_body(r#"{"names": ["rust", "http"]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let topics = client.get_repository_topics("o", "r").await.unwrap();
    assert_eq!(topics, vec!["rust", "http"]);
}

#[tokio::test]
async fn test_file_contents_round_trip() {
    let mut server = Server::new_async().await;
    let raw = server
        .mock("GET", "/repos/o/r/contents/docs/README.md")
        .match_header("accept", "application/vnd.github.raw+json")
        .match_query(Matcher::UrlEncoded("ref".into(), "main".into()))
        .with_status(200)
        .with_body("# Hello\n")
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/repos/o/r/contents/docs/README.md")
        .match_body(Matcher::Json(json!({
            "message": "Update readme",
            "content": "IyBIZWxsbwo=",
            "branch": "main",
            "sha": "abc123"
        })))
        .with_status(200)
        .with_body(r#"{"content": {"sha": "def456"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let bytes = client
        .get_file_raw("o", "r", "docs/README.md", Some("main"))
        .await
        .unwrap();
    assert_eq!(bytes, b"# Hello\n");

    let update = FileUpdate::new("Update readme", bytes)
        .on_branch("main")
        .replacing("abc123");
    let written = client
        .create_or_update_file("o", "r", "docs/README.md", &update)
        .await
        .unwrap();

    assert_eq!(written["content"]["sha"], "def456");
    raw.assert_async().await;
    put.assert_async().await;
}

#[tokio::test]
async fn test_workflow_runs_by_file_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/o/r/actions/workflows/ci.yml/runs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("branch".into(), "main".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"total_count": 2, "workflow_runs": [{"id": 1}, {"id": 2}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let params = WorkflowRunListParams {
        branch: Some("main".to_string()),
        ..WorkflowRunListParams::default()
    };
    let workflow = WorkflowId::from("ci.yml");
    let runs = client
        .list_workflow_runs("o", "r", Some(&workflow), &params, Listing::All)
        .await
        .unwrap();

    assert_eq!(runs.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trending_is_a_single_sorted_search() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::Regex("q=stars".to_string()),
            Matcher::Regex("language%3Arust".to_string()),
            Matcher::UrlEncoded("sort".into(), "stars".into()),
            Matcher::UrlEncoded("order".into(), "desc".into()),
            Matcher::UrlEncoded("per_page".into(), "2".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"total_count": 50, "items": [{"id": 1}, {"id": 2}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let query = TrendingQuery {
        language: Some("rust".to_string()),
        window: TrendingWindow::Weekly,
        limit: 2,
    };
    let repos = client.trending_repositories(&query).await.unwrap();

    assert_eq!(repos.len(), 2);
    mock.assert_async().await;
}
