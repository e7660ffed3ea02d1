//! Message operations.

use crate::dispatcher::Operation;
use crate::transport::CallDescriptor;
use crate::Outcome;

use super::RocketChatApi;

const SEND_MESSAGE: Operation = Operation {
    name: "send_msg",
    not_found: "send message failed",
    unexpected: "Unable to connect to rocket chat during sending message.",
};

const UNREAD_MESSAGES: Operation = Operation {
    name: "get_unread_msg",
    not_found: "get unread messages failed",
    unexpected: "Unable to connect to rocket chat during getting unread messages.",
};

impl RocketChatApi {
    /// Post `message` to the room with id `room_id`.
    pub async fn send_msg(&self, room_id: &str, message: &str) -> Outcome<serde_json::Value> {
        let call = CallDescriptor::post(self.target.make_uri("v1/chat.postMessage"))
            .with_json(serde_json::json!({ "roomId": room_id, "text": message }));
        self.dispatcher.call(call, &SEND_MESSAGE).await
    }

    /// Fetch the unread messages of a room.
    pub async fn get_unread_msg(&self, room_id: &str) -> Outcome<serde_json::Value> {
        let call = CallDescriptor::get(self.target.make_uri(&format!("rooms/{room_id}/messages")));
        self.dispatcher.call(call, &UNREAD_MESSAGES).await
    }
}
