//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{VoiceboxAskTool, VoiceboxGenerateQueryTool, VoiceboxSettingsTool};
use super::dispatcher::ToolDispatcher;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(dispatcher: ToolDispatcher) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(VoiceboxSettingsTool::create_route(dispatcher.clone()))
        .with_route(VoiceboxAskTool::create_route(dispatcher.clone()))
        .with_route(VoiceboxGenerateQueryTool::create_route(dispatcher))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::CredentialsConfig;
    use crate::domains::voicebox::fake::FakeCloudClient;
    use std::sync::Arc;

    struct TestServer {}

    fn test_dispatcher() -> ToolDispatcher {
        ToolDispatcher::new(Arc::new(FakeCloudClient::new()), CredentialsConfig::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_dispatcher());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"voicebox_settings"));
        assert!(names.contains(&"voicebox_ask"));
        assert!(names.contains(&"voicebox_generate_query"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let dispatcher = test_dispatcher();
        let registry = ToolRegistry::new(dispatcher.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(dispatcher);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
