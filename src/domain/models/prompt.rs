#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

#[derive(Clone, Debug, PartialEq)]
pub struct ChatPrompt {
    pub text: String,
    pub temperature: Option<f64>,
}

impl ChatPrompt {
    pub fn new(text: &str, temperature: Option<f64>) -> ChatPrompt {
        return ChatPrompt {
            text: text.to_string(),
            temperature,
        };
    }

    /// The single prompt string sent to the model, with the live temperature
    /// prepended as context.
    pub fn render(&self) -> String {
        let temperature = match self.temperature {
            Some(temp) => format!("{temp}°C"),
            None => "[unknown]".to_string(),
        };

        return format!(
            "Based on the current temperature {temperature}, {text}",
            text = self.text
        );
    }
}

/// One accepted send, handed from the chat session to the transport worker.
/// `generation` ties the eventual reply back to the session that asked.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub generation: u64,
    pub prompt: ChatPrompt,
    pub credential: Option<String>,
}
