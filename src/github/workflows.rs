//! GitHub Actions workflows and their runs
//!
//! Both list endpoints wrap their items in an envelope object
//! (`{"total_count": n, "workflows": [...]}`), so sweeps name the items field.

use super::client::GitHubClient;
use super::error::Result;
use super::pagination::Listing;
use super::request::RequestDescriptor;
use super::types::{WorkflowId, WorkflowRunListParams};
use serde_json::Value;

/// Items field of the workflow listing
pub const WORKFLOWS_FIELD: &str = "workflows";

/// Items field of the run listing
pub const RUNS_FIELD: &str = "workflow_runs";

/// Request builders for workflow endpoints
pub mod request {
    use super::*;

    pub fn list(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/actions/workflows"))
    }

    pub fn get(owner: &str, repo: &str, workflow: &WorkflowId) -> RequestDescriptor {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/actions/workflows/{workflow}"))
    }

    /// Runs of one workflow, or of every workflow when `workflow` is `None`
    pub fn list_runs(
        owner: &str,
        repo: &str,
        workflow: Option<&WorkflowId>,
        params: &WorkflowRunListParams,
    ) -> Result<RequestDescriptor> {
        let path = match workflow {
            Some(workflow) => format!("/repos/{owner}/{repo}/actions/workflows/{workflow}/runs"),
            None => format!("/repos/{owner}/{repo}/actions/runs"),
        };
        RequestDescriptor::get(path).query(params)
    }
}

impl GitHubClient {
    pub async fn list_workflows(
        &self,
        owner: &str,
        repo: &str,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        let options = self.page_options().with_items_field(WORKFLOWS_FIELD);
        self.list(request::list(owner, repo), listing, options).await
    }

    /// Get a workflow by numeric id or by file name (e.g. `ci.yml`)
    pub async fn get_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow: &WorkflowId,
    ) -> Result<Value> {
        self.execute_json(&request::get(owner, repo, workflow)).await
    }

    /// List workflow runs
    ///
    /// # Arguments
    /// * `workflow` - Restrict to one workflow; all runs of the repository when `None`
    /// * `params` - Status, branch, event and actor filters
    pub async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow: Option<&WorkflowId>,
        params: &WorkflowRunListParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        let options = self.page_options().with_items_field(RUNS_FIELD);
        self.list(
            request::list_runs(owner, repo, workflow, params)?,
            listing,
            options,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_by_id_or_file() {
        let req = request::get("o", "r", &WorkflowId::Id(161335));
        assert_eq!(req.path, "/repos/o/r/actions/workflows/161335");

        let req = request::get("o", "r", &WorkflowId::from("ci.yml"));
        assert_eq!(req.path, "/repos/o/r/actions/workflows/ci.yml");
    }

    #[test]
    fn test_run_filters() {
        let params = WorkflowRunListParams {
            branch: Some("main".to_string()),
            status: Some("failure".to_string()),
            ..WorkflowRunListParams::default()
        };
        let req = request::list_runs("o", "r", Some(&WorkflowId::Id(7)), &params).unwrap();
        assert_eq!(req.path, "/repos/o/r/actions/workflows/7/runs");
        assert_eq!(req.query_as::<WorkflowRunListParams>().unwrap(), params);

        let req = request::list_runs("o", "r", None, &WorkflowRunListParams::default()).unwrap();
        assert_eq!(req.path, "/repos/o/r/actions/runs");
        assert!(req.query.is_empty());
    }
}
