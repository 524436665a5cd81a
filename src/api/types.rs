use serde::{Deserialize, Serialize};

/// Messages API request body
#[derive(Serialize, Debug)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: &'a str,
    pub messages: Vec<Message<'a>>,
}

#[derive(Serialize, Debug)]
pub struct Message<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> MessagesRequest<'a> {
    /// Single-turn request carrying `instructions` as the only user message
    pub fn single_turn(
        model: &'a str,
        max_tokens: u32,
        system: &'a str,
        instructions: &'a str,
    ) -> Self {
        Self {
            model,
            max_tokens,
            system,
            messages: vec![Message {
                role: "user",
                content: instructions,
            }],
        }
    }
}

/// Messages API response, only the fields read here
#[derive(Deserialize, Debug)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Option<Vec<ContentBlock>>,
}

#[derive(Deserialize, Debug)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<String>,
}

impl MessagesResponse {
    /// Text of the first content block, or a description of what was found instead
    pub fn into_first_text(self) -> Result<String, String> {
        let blocks = self.content.ok_or("missing `content` list")?;
        let first = blocks
            .into_iter()
            .next()
            .ok_or("empty `content` list")?;
        match (first.text, first.kind) {
            (Some(text), _) => Ok(text),
            (None, Some(kind)) => Err(format!(
                "first `content` block is `{kind}`, not text"
            )),
            (None, None) => Err("first `content` block has no `text`".to_string()),
        }
    }
}
