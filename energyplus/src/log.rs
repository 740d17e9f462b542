/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

/// How serious a [`LogMessage`] is
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    /// Details on what the translator does
    Debug,

    /// Something the user may want to know (e.g., a default was used)
    Info,

    /// Something was ignored or changed
    Warn,

    /// Something could not be translated
    Error,
}

/// A message produced during a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    /// How serious it is
    pub level: LogLevel,

    /// Who produced it (e.g., `energyplus.ForwardTranslator`)
    pub channel: String,

    /// The message itself
    pub message: String,
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] <{}> {}", self.channel, self.level, self.message)
    }
}

/// Collects the messages of a translator, forwarding them to `tracing`
/// as well.
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    channel: &'static str,
    messages: Vec<LogMessage>,
}

impl LogSink {
    /// Creates an empty sink that tags its messages with `channel`
    pub fn new(channel: &'static str) -> Self {
        Self {
            channel,
            messages: Vec::new(),
        }
    }

    /// Registers a message
    pub fn log<S: Into<String>>(&mut self, level: LogLevel, message: S) {
        let message = message.into();
        match level {
            LogLevel::Debug => tracing::debug!(channel = self.channel, "{}", message),
            LogLevel::Info => tracing::info!(channel = self.channel, "{}", message),
            LogLevel::Warn => tracing::warn!(channel = self.channel, "{}", message),
            LogLevel::Error => tracing::error!(channel = self.channel, "{}", message),
        }
        self.messages.push(LogMessage {
            level,
            channel: self.channel.to_string(),
            message,
        });
    }

    /// Registers a [`LogLevel::Debug`] message
    pub fn debug<S: Into<String>>(&mut self, message: S) {
        self.log(LogLevel::Debug, message)
    }

    /// Registers a [`LogLevel::Info`] message
    pub fn info<S: Into<String>>(&mut self, message: S) {
        self.log(LogLevel::Info, message)
    }

    /// Registers a [`LogLevel::Warn`] message
    pub fn warn<S: Into<String>>(&mut self, message: S) {
        self.log(LogLevel::Warn, message)
    }

    /// Registers a [`LogLevel::Error`] message
    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.log(LogLevel::Error, message)
    }

    /// All the messages, in the order they were produced
    pub fn messages(&self) -> &[LogMessage] {
        &self.messages
    }

    /// The messages of a certain level
    pub fn messages_at(&self, level: LogLevel) -> Vec<&LogMessage> {
        self.messages.iter().filter(|m| m.level == level).collect()
    }

    /// Forgets all the messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
