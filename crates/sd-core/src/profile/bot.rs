use serde::{Deserialize, Serialize};

use crate::ids::BotId;

/// Profile record of a bot integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfo {
    pub id: BotId,
    pub name: String,
}

/// `bots.info` response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfoResponse {
    pub bot: BotInfo,
}
