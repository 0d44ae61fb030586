//! JSON Lines 界面 - 每次出站调用写出一个事件对象

use anyhow::Result;
use serde_json::json;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use tracing::debug;

use crate::message::fields::Payload;
use crate::render::NotificationDescriptor;
use crate::surface::{AppCallback, NotificationSurface};

/// 向任意 writer 写出 `{"event": ..., ...}` 行
pub struct JsonLinesSurface<W: Write + Send> {
    writer: Mutex<W>,
}

impl JsonLinesSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonLinesSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, event: serde_json::Value) -> Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(writer, "{}", serde_json::to_string(&event)?)?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> NotificationSurface for JsonLinesSurface<W> {
    fn name(&self) -> &str {
        "json_lines"
    }

    fn notify(&self, key: i32, descriptor: &NotificationDescriptor) -> Result<()> {
        debug!(key, "Writing notify event");
        self.emit(json!({"event": "notify", "key": key, "descriptor": descriptor}))
    }

    fn set_tap_action(&self, key: i32, payload: &Payload) -> Result<()> {
        self.emit(json!({"event": "tap_action", "key": key, "payload": payload}))
    }
}

impl<W: Write + Send> AppCallback for JsonLinesSurface<W> {
    fn on_message(&self, payload: &Payload) -> Result<()> {
        self.emit(json!({"event": "app_message", "payload": payload}))
    }

    fn on_token(&self, token: &str) -> Result<()> {
        self.emit(json!({"event": "token", "token": token}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_line_per_event() {
        let surface = JsonLinesSurface::new(Vec::new());
        surface.on_token("tok").unwrap();

        let mut payload = Payload::new();
        payload.insert("tap".to_string(), false.into());
        surface.on_message(&payload).unwrap();

        let output = String::from_utf8(surface.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "token");
        assert_eq!(lines[0]["token"], "tok");
        assert_eq!(lines[1]["event"], "app_message");
        assert_eq!(lines[1]["payload"]["tap"], false);
    }
}
