//! Display-name derivation shared by human and bot entries
//!
//! Every function here is pure given its inputs; colorization only queries
//! the injected [`NickColorPort`].

use crate::color::{nick_color, with_color};
use crate::context::WorkspaceContext;
use crate::ids::UserId;
use crate::ports::NickColorPort;
use crate::profile::UserInfo;

/// Remove every U+0020 space. Other whitespace is kept.
pub fn strip_spaces(name: &str) -> String {
    name.replace(' ', "")
}

/// Select the un-normalized name of a user.
///
/// A display name wins outright unless real names are preferred. Otherwise
/// the first present of display name, real name and canonical name is used,
/// in that order.
pub fn base_name(info: &UserInfo, use_real_names: bool) -> &str {
    if let Some(display_name) = info.display_name() {
        if !use_real_names {
            return display_name;
        }
    }

    info.display_name()
        .or_else(|| info.real_name())
        .unwrap_or(info.name.as_str())
}

/// Derive the nick shown for a human account.
///
/// The external-user suffix is appended after color wrapping so it is never
/// colored itself.
pub fn format_user_nick(
    id: &UserId,
    info: &UserInfo,
    ctx: &WorkspaceContext,
    colors: &dyn NickColorPort,
    colorize: bool,
) -> String {
    let mut nick = strip_spaces(base_name(info, ctx.config.use_real_names));

    if colorize {
        let color = nick_color(colors, &nick, ctx.is_self(id));
        nick = with_color(colors, &color, &nick);
    }

    if ctx.is_external_team(info.team()) {
        #[cfg(feature = "tracing")]
        tracing::trace!(user_id = %id, team = %info.team(), "appending external user suffix");
        nick.push_str(&ctx.config.external_user_suffix);
    }

    nick
}

/// Derive the nick shown for a bot.
///
/// Usable without an entry. Bots are never the local user and carry no team,
/// so the bot suffix is appended unconditionally.
pub fn format_bot_nick(
    name: &str,
    colorize: bool,
    ctx: &WorkspaceContext,
    colors: &dyn NickColorPort,
) -> String {
    let mut nick = strip_spaces(name);

    if colorize {
        let color = nick_color(colors, &nick, false);
        nick = with_color(colors, &color, &nick);
    }

    nick + &ctx.config.bot_user_suffix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorToken;
    use crate::config::DirectoryConfig;
    use crate::ids::TeamId;
    use crate::ports::MockNickColors;
    use crate::profile::UserProfile;

    fn context(config: DirectoryConfig) -> WorkspaceContext {
        WorkspaceContext::new(TeamId::from("T1"), UserId::from("UME"), config)
    }

    fn user(display_name: Option<&str>, real_name: Option<&str>, team: &str) -> UserInfo {
        UserInfo {
            id: UserId::from("U1"),
            name: "alice.b".to_string(),
            real_name: real_name.map(str::to_string),
            profile: UserProfile {
                display_name: display_name.map(str::to_string),
                team: TeamId::from(team),
            },
        }
    }

    fn bracket_colors() -> MockNickColors {
        let mut colors = MockNickColors::new();
        colors
            .expect_color_for_name()
            .returning(|_| ColorToken::from("cyan"));
        colors
            .expect_self_nick_color()
            .returning(|| ColorToken::from("white"));
        colors
            .expect_colorize()
            .returning(|color, text| format!("<{}>{}</>", color, text));
        colors
    }

    #[test]
    fn test_strip_spaces_only_removes_spaces() {
        assert_eq!(strip_spaces(" Alice  B "), "AliceB");
        assert_eq!(strip_spaces("Alice\tB"), "Alice\tB");
    }

    #[test]
    fn test_base_name_prefers_display_name() {
        let info = user(Some("Alice B"), Some("Alice Baker"), "T1");
        assert_eq!(base_name(&info, false), "Alice B");
    }

    #[test]
    fn test_base_name_falls_back_to_real_then_canonical() {
        let info = user(None, Some("Alice Baker"), "T1");
        assert_eq!(base_name(&info, false), "Alice Baker");

        let info = user(None, None, "T1");
        assert_eq!(base_name(&info, false), "alice.b");
    }

    #[test]
    fn test_base_name_with_real_names_keeps_fallback_order() {
        let info = user(Some("Alice B"), Some("Alice Baker"), "T1");
        assert_eq!(base_name(&info, true), "Alice B");

        let info = user(None, Some("Alice Baker"), "T1");
        assert_eq!(base_name(&info, true), "Alice Baker");
    }

    #[test]
    fn test_user_nick_same_team() {
        let ctx = context(DirectoryConfig::default());
        let info = user(Some("Alice B"), None, "T1");
        let colors = MockNickColors::new();

        let nick = format_user_nick(&info.id, &info, &ctx, &colors, false);
        assert_eq!(nick, "AliceB");
    }

    #[test]
    fn test_user_nick_external_team_gets_suffix_once() {
        let ctx = context(DirectoryConfig {
            external_user_suffix: "[ext]".to_string(),
            ..DirectoryConfig::default()
        });
        let info = user(Some("Alice B"), None, "T2");
        let colors = MockNickColors::new();

        let nick = format_user_nick(&info.id, &info, &ctx, &colors, false);
        assert_eq!(nick, "AliceB[ext]");
        assert_eq!(nick.matches("[ext]").count(), 1);
    }

    #[test]
    fn test_external_suffix_is_outside_color_wrapping() {
        let ctx = context(DirectoryConfig {
            external_user_suffix: "[ext]".to_string(),
            ..DirectoryConfig::default()
        });
        let info = user(Some("Alice B"), None, "T2");
        let colors = bracket_colors();

        let nick = format_user_nick(&info.id, &info, &ctx, &colors, true);
        assert_eq!(nick, "<cyan>AliceB</>[ext]");
    }

    #[test]
    fn test_self_user_gets_self_color() {
        let ctx = context(DirectoryConfig::default());
        let mut info = user(Some("me"), None, "T1");
        info.id = UserId::from("UME");
        let colors = bracket_colors();

        let nick = format_user_nick(&info.id, &info, &ctx, &colors, true);
        assert_eq!(nick, "<white>me</>");
    }

    #[test]
    fn test_bot_nick_appends_suffix() {
        let ctx = context(DirectoryConfig {
            bot_user_suffix: " [BOT]".to_string(),
            ..DirectoryConfig::default()
        });
        let colors = MockNickColors::new();

        assert_eq!(format_bot_nick("My Bot", false, &ctx, &colors), "MyBot [BOT]");
    }

    #[test]
    fn test_bot_nick_colorized_suffix_stays_plain() {
        let ctx = context(DirectoryConfig::default());
        let colors = bracket_colors();

        assert_eq!(format_bot_nick("My Bot", true, &ctx, &colors), "<cyan>MyBot</> :]");
    }

    #[test]
    fn test_bot_nick_strips_every_space_and_ends_with_suffix() {
        let cases = [
            // (name, colorize, suffix, expected nick before the suffix)
            ("My Bot", false, " :]", "MyBot"),
            (" Leading", false, " :]", "Leading"),
            ("Trailing ", false, " :]", "Trailing"),
            ("Many   Inner  Gaps", false, " [BOT]", "ManyInnerGaps"),
            ("  Both  Ends  ", false, "*", "BothEnds"),
            ("   ", false, " :]", ""),
            (" My  Bot ", true, " :]", "<cyan>MyBot</>"),
            ("Deploy Bot", true, "", "<cyan>DeployBot</>"),
            ("Deploy Bot", false, "", "DeployBot"),
        ];

        for (name, colorize, suffix, expected) in cases {
            let ctx = context(DirectoryConfig {
                bot_user_suffix: suffix.to_string(),
                ..DirectoryConfig::default()
            });
            let colors = bracket_colors();

            let nick = format_bot_nick(name, colorize, &ctx, &colors);

            assert!(nick.ends_with(suffix), "{:?} lost its suffix: {:?}", name, nick);
            let head = &nick[..nick.len() - suffix.len()];
            assert!(!head.contains(' '), "{:?} kept a space: {:?}", name, nick);
            assert_eq!(head, expected, "case {:?} colorize={}", name, colorize);
        }
    }
}
