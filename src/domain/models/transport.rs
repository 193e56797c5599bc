use async_trait::async_trait;

use super::ChatPrompt;

pub const DEMO_REPLY: &str = "I'm running in demo mode right now. Add a Gemini API key with `/key YOUR_KEY` (or set WEATHERBOT_GEMINI_TOKEN) and I'll give you real answers about the weather! 🌤️";
pub const APOLOGY_NO_RESPONSE: &str = "Sorry, I couldn't get a response from Gemini API.";
pub const APOLOGY_CONNECTION: &str = "Sorry, there was a problem connecting to Gemini.";
pub const APOLOGY_TIMEOUT: &str = "Sorry, Gemini took too long to answer. Please try again.";

#[async_trait]
pub trait ChatTransport {
    /// Asks the model and returns the text to append to the transcript.
    ///
    /// `credential` overrides the configured key for this request. When no
    /// usable key exists at all, a canned demo reply is returned instead of
    /// calling the network. Failures never escape: they come back as one of
    /// the apology strings.
    async fn ask(&self, prompt: ChatPrompt, credential: Option<String>) -> String;
}

pub type ChatTransportBox = Box<dyn ChatTransport + Send + Sync>;
