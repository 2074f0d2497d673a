use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::ScanContext,
    issues::Issue,
};

use super::types::{
    ConfigDto, ConfigValues, DiagnosticCounts, GetConfigParams, ListStepsParams, ListStepsResult,
    Pagination, ScanOverviewParams, ScanOverviewResult, StepItem,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct StepcatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for StepcatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl StepcatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current stepcat configuration
    #[tool(description = "Get the current stepcat configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Get catalog statistics without step details
    #[tool(
        description = "Get statistics of all step definitions (counts by type, duplicated patterns, diagnostics) without detailed items. Use this first to understand the project."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = scan_project(&params.0.project_root_path)?;
        let catalog = ctx.catalog();
        let stats = &catalog.stats;

        let mut diagnostics = DiagnosticCounts::default();
        for issue in &catalog.issues {
            match issue {
                Issue::UnterminatedBody(_) => diagnostics.unterminated_body += 1,
                Issue::UnmatchedPattern(_) => diagnostics.unmatched_pattern += 1,
                Issue::ReadError(_) => diagnostics.read_error += 1,
            }
        }

        to_tool_result(&ScanOverviewResult {
            total_count: stats.total,
            by_type: stats.by_type.clone(),
            ambiguous_count: stats.ambiguous,
            files_scanned: stats.files_scanned,
            files_with_steps: stats.files_with_steps,
            diagnostics,
        })
    }

    /// List step definitions with their code
    #[tool(
        description = "List step definitions (type, name, file, line, comments and body). Optionally filter by stepType. Returns paginated list."
    )]
    pub async fn list_steps(
        &self,
        params: Parameters<ListStepsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = scan_project(&params.project_root_path)?;
        let catalog = ctx.catalog();
        let matching: Vec<StepItem> = match params.step_type {
            Some(step_type) => catalog.steps_of_type(step_type).map(StepItem::from).collect(),
            None => catalog.steps.iter().map(StepItem::from).collect(),
        };

        let total_count = matching.len();
        let items: Vec<StepItem> = matching.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        to_tool_result(&ListStepsResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }
}

fn scan_project(project_root_path: &str) -> Result<ScanContext, McpError> {
    let args = CommonArgs {
        source_root: Some(PathBuf::from(project_root_path)),
        include: Vec::new(),
        ignore: Vec::new(),
        verbose: false,
    };
    ScanContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for StepcatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Stepcat MCP gives coding agents a catalog of BDD step definitions \
                 (Cucumber Ruby and SpecFlow C#).\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_overview - Get step counts by type, duplicated patterns and diagnostics\n\
                 3. list_steps - Get step definitions with comments and body (paginated)\n\n\
                 Check list_steps before writing a new step: reuse an existing pattern \
                 where one already matches."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = StepcatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
