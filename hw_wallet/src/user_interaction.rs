use derive_more::Display;

/// The different types of user interactions the device can request.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Button,
    PinMatrix,
    Passphrase,
}

/// Input supplied by the embedder while an operation is suspended on a prompt.
///
/// PIN digits are encoded by position on the device's scrambled keypad:
/// 7 8 9
/// 4 5 6
/// 1 2 3
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserInput {
    Pin(String),
    Passphrase(String),
    Cancel,
}
