//! Snapshot tests for the OpenAI client

#[cfg(test)]
mod snapshot_tests {
    use crate::{CompletionService, OpenAiClient, OpenAiConfig};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = OpenAiConfig::new("sk-live-should-not-appear");

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: "[redacted]"
        api_url: "https://api.openai.com/v1"
        model: gpt-3.5-turbo-instruct
        "###);
    }

    #[test]
    fn test_model_id() {
        let config = OpenAiConfig::new("sk-test").with_model("davinci-002");
        let client = OpenAiClient::new(config).unwrap();

        assert_yaml_snapshot!(client.model_id(), @"davinci-002");
    }
}
