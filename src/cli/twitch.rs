// src/cli/twitch.rs - Read-only Twitch chat as an anonymous viewer

use std::time::Duration;

use crossterm::style::Stylize;
use twitch_irc::login::StaticLoginCredentials;
use twitch_irc::message::ServerMessage;
use twitch_irc::{ClientConfig, SecureTCPTransport, TwitchIRCClient};

use crate::infra::config::TwitchConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Joined(String),
    Message { user: String, text: String },
    Ignored,
}

pub fn interpret(msg: &ServerMessage) -> ChatEvent {
    match msg {
        ServerMessage::Join(join) => ChatEvent::Joined(join.channel_login.clone()),
        ServerMessage::Privmsg(privmsg) => {
            let user = if privmsg.sender.name.is_empty() {
                privmsg.sender.login.clone()
            } else {
                privmsg.sender.name.clone()
            };
            ChatEvent::Message {
                user,
                text: privmsg.message_text.clone(),
            }
        }
        _ => ChatEvent::Ignored,
    }
}

/// Channel login as the client expects it: lowercase, no leading `#`.
pub fn normalize_channel(channel: &str) -> String {
    channel.trim().trim_start_matches('#').to_lowercase()
}

fn print_event(event: ChatEvent) {
    match event {
        ChatEvent::Joined(channel) => {
            tracing::debug!(%channel, "joined");
            println!("{}", "✅ Connected to Twitch Chat!".green());
        }
        ChatEvent::Message { user, text } => {
            println!("{} {}", format!("{user}:").green(), text.white());
        }
        ChatEvent::Ignored => {}
    }
}

/// `brightside twitch <channel>`
pub async fn run_twitch(channel: &str, config: &TwitchConfig) -> anyhow::Result<()> {
    let channel = normalize_channel(channel);

    let client_config = ClientConfig::new_simple(StaticLoginCredentials::anonymous());
    let (mut incoming, client) =
        TwitchIRCClient::<SecureTCPTransport, StaticLoginCredentials>::new(client_config);
    client
        .join(channel.clone())
        .map_err(|e| anyhow::anyhow!("Invalid Twitch channel '{channel}': {e}"))?;

    // The client reconnects on its own, so silence is the only failure signal.
    let timeout = Duration::from_secs(config.connect_timeout_secs);
    match tokio::time::timeout(timeout, incoming.recv()).await {
        Ok(Some(first)) => print_event(interpret(&first)),
        Ok(None) => anyhow::bail!("Error connecting to Twitch chat: connection closed"),
        Err(_) => anyhow::bail!(
            "Error connecting to Twitch chat: no response within {}s",
            config.connect_timeout_secs
        ),
    }

    while let Some(message) = incoming.recv().await {
        print_event(interpret(&message));
    }

    println!("Disconnected from #{channel}.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use twitch_irc::message::IRCMessage;

    fn server_message(line: &str) -> ServerMessage {
        ServerMessage::try_from(IRCMessage::parse(line).unwrap()).unwrap()
    }

    #[test]
    fn test_privmsg_uses_display_name() {
        let msg = server_message(
            "@badge-info=;badges=;color=#0000FF;display-name=JuN1oRRRR;emotes=;flags=;id=e9d998c3-36f1-430f-89ec-6b887c28af36;mod=0;room-id=11148817;subscriber=0;tmi-sent-ts=1594545155039;turbo=0;user-id=29803735;user-type= :jun1orrrr!jun1orrrr@jun1orrrr.tmi.twitch.tv PRIVMSG #pajlada :dank cam",
        );
        assert_eq!(
            interpret(&msg),
            ChatEvent::Message {
                user: "JuN1oRRRR".into(),
                text: "dank cam".into()
            }
        );
    }

    #[test]
    fn test_join_is_connected() {
        let msg =
            server_message(":justinfan12345!justinfan12345@justinfan12345.tmi.twitch.tv JOIN #pajlada");
        assert_eq!(interpret(&msg), ChatEvent::Joined("pajlada".into()));
    }

    #[test]
    fn test_other_messages_ignored() {
        let msg = server_message("PING :tmi.twitch.tv");
        assert_eq!(interpret(&msg), ChatEvent::Ignored);
    }

    #[test]
    fn test_normalize_channel() {
        assert_eq!(normalize_channel("SomeStreamer"), "somestreamer");
        assert_eq!(normalize_channel("#already"), "already");
        assert_eq!(normalize_channel("  ##spaced "), "spaced");
    }

    #[tokio::test]
    async fn test_invalid_channel_is_error() {
        let err = run_twitch("not a channel!", &TwitchConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid Twitch channel"));
    }
}
