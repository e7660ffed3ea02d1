//! Channel operations.

use crate::dispatcher::Operation;
use crate::transport::CallDescriptor;
use crate::Outcome;

use super::RocketChatApi;

const CREATE_ROOM: Operation = Operation {
    name: "create_room",
    not_found: "create room failed",
    unexpected: "Unable to connect to rocket chat during room create. Room may already exist.",
};

const PUBLIC_ROOMS: Operation = Operation {
    name: "get_public_rooms",
    not_found: "get public rooms failed",
    unexpected: "Unable to connect to rocket chat during getting public rooms.",
};

const JOIN_ROOM: Operation = Operation {
    name: "join_room",
    not_found: "join room failed",
    unexpected: "Unable to connect to rocket chat during joining room.",
};

const LEAVE_ROOM: Operation = Operation {
    name: "leave_room",
    not_found: "leave room failed",
    unexpected: "Unable to connect to rocket chat during leaving room.",
};

impl RocketChatApi {
    /// Create a public channel named `room_name`.
    pub async fn create_room(&self, room_name: &str) -> Outcome<serde_json::Value> {
        let call = CallDescriptor::post(self.target.make_uri("v1/channels.create"))
            .with_form([("name", room_name)]);
        self.dispatcher.call(call, &CREATE_ROOM).await
    }

    /// List the public channels.
    pub async fn get_public_rooms(&self) -> Outcome<serde_json::Value> {
        let call = CallDescriptor::get(self.target.make_uri("v1/channels.list"));
        self.dispatcher.call(call, &PUBLIC_ROOMS).await
    }

    pub async fn join_room(&self, room_id: &str) -> Outcome<serde_json::Value> {
        let call = CallDescriptor::post(self.target.make_uri("v1/channels.join"))
            .with_json(serde_json::json!({ "roomId": room_id }));
        self.dispatcher.call(call, &JOIN_ROOM).await
    }

    pub async fn leave_room(&self, room_id: &str) -> Outcome<serde_json::Value> {
        let call = CallDescriptor::post(self.target.make_uri("v1/channels.leave"))
            .with_json(serde_json::json!({ "roomId": room_id }));
        self.dispatcher.call(call, &LEAVE_ROOM).await
    }
}
