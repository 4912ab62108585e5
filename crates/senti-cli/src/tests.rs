//! Snapshot tests for the session trigger path

#[cfg(test)]
mod snapshot_tests {
    use crate::{read_entry, Command, Outcome, Session};
    use async_trait::async_trait;
    use insta::assert_yaml_snapshot;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use senti_core::{
        CompletionParams, CompletionService, Error, MaxTokens, Result, SentimentAnalyzer,
        Temperature,
    };

    struct ScriptedService {
        reply: fn() -> Result<String>,
    }

    impl ScriptedService {
        fn new(reply: fn() -> Result<String>) -> Self {
            Self { reply }
        }
    }

    #[async_trait]
    impl CompletionService for ScriptedService {
        async fn complete(&self, _instruction: &str, _params: &CompletionParams) -> Result<String> {
            (self.reply)()
        }

        fn model_id(&self) -> &str {
            "scripted"
        }
    }

    fn positive() -> Result<String> {
        Ok("The sentiment is strongly positive.".to_string())
    }

    fn never_called() -> Result<String> {
        panic!("blank input must not reach the completion service")
    }

    fn unauthorized() -> Result<String> {
        Err(Error::Authentication("Incorrect API key provided".to_string()))
    }

    #[tokio::test]
    async fn test_analysis_outcome() {
        let analyzer = SentimentAnalyzer::new(ScriptedService::new(positive));
        let mut session = Session::default();
        session.set_text("I love this product, it works great!");

        let outcome = session.submit(&analyzer).await;

        assert!(matches!(&outcome, Outcome::Analysis(r) if !r.body.is_empty()));
        assert_yaml_snapshot!("analysis_outcome", outcome);
    }

    #[tokio::test]
    async fn test_blank_text_shows_warning() {
        let analyzer = SentimentAnalyzer::new(ScriptedService::new(never_called));
        let mut session = Session::default();
        session.set_text("   ");

        let outcome = session.submit(&analyzer).await;

        assert_eq!(
            outcome,
            Outcome::Warning("Please enter some text to analyze.".to_string())
        );
    }

    #[tokio::test]
    async fn test_auth_failure_keeps_session_usable() {
        let analyzer = SentimentAnalyzer::new(ScriptedService::new(unauthorized));
        let mut session = Session::new(Temperature::new(0.0).unwrap(), MaxTokens::new(50).unwrap());
        session.set_text("fine");

        let first = session.submit(&analyzer).await;
        let second = session.submit(&analyzer).await;

        assert_eq!(first, second);
        assert_eq!(
            first,
            Outcome::Failure(
                "Analysis failed: Authentication error: Incorrect API key provided".to_string()
            )
        );
    }

    struct CapturingService {
        instructions: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl CompletionService for CapturingService {
        async fn complete(&self, instruction: &str, _params: &CompletionParams) -> Result<String> {
            self.instructions.lock().unwrap().push(instruction.to_string());
            Ok("Mixed.".to_string())
        }

        fn model_id(&self) -> &str {
            "capturing"
        }
    }

    #[tokio::test]
    async fn test_multi_line_text_is_one_request() {
        let instructions = Arc::new(Mutex::new(Vec::new()));
        let analyzer = SentimentAnalyzer::new(CapturingService {
            instructions: Arc::clone(&instructions),
        });
        let mut input = Cursor::new("The food was great.\nBut the service was awful.\n");
        let mut session = Session::default();

        while let Some(entry) = read_entry(&mut input).unwrap() {
            match Command::parse(&entry).unwrap() {
                Command::Analyze(text) => {
                    session.set_text(text);
                    session.submit(&analyzer).await;
                }
                other => panic!("unexpected command {:?}", other),
            }
        }

        let instructions = instructions.lock().unwrap();
        assert_eq!(instructions.len(), 1);
        assert!(instructions[0].contains("The food was great.\nBut the service was awful."));
    }

    #[test]
    fn test_commands_update_form() {
        let mut session = Session::default();

        for line in [":temp 0.0", ":tokens 50"] {
            match Command::parse(line).unwrap() {
                Command::SetTemperature(t) => session.set_temperature(t),
                Command::SetMaxTokens(m) => session.set_max_tokens(m),
                other => panic!("unexpected command {:?}", other),
            }
        }

        assert_yaml_snapshot!(session.form, @r###"
        ---
        text: ""
        temperature: 0.0
        max_tokens: 50
        "###);
    }
}
