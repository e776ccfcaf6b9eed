//! Command handling end to end, with a scripted panel.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use panelbot::adapter::inbound::telegram::{
    route_message, BotCommand, BotControl, BotReply, Route, FAILURE_TEXT,
};
use panelbot::error::PanelError;
use panelbot::infrastructure::config::telegram::TelegramAppConfig;
use panelbot::testkit::fixtures::sample_report;
use panelbot::testkit::panel::ScriptedPanel;

fn control(panel: ScriptedPanel) -> BotControl {
    BotControl::new(Arc::new(panel), "PANEL 2 (TronPanel)", "👑 @atmkrnca 👑")
}

fn command(text: &str) -> BotCommand {
    match route_message(text, 42, Some("panel_bot"), &TelegramAppConfig::default()) {
        Some(Route::Command(command)) => command,
        other => panic!("expected a command for {text}, got {other:?}"),
    }
}

#[test]
fn veri_queries_the_panel_once_per_message() {
    let panel = ScriptedPanel::returning(sample_report()).then(Ok(sample_report()));
    let calls = panel.calls();
    let control = control(panel);

    let first = tokio_test::block_on(control.execute(command("/veri")));
    let second = tokio_test::block_on(control.execute(command("/veri@panel_bot")));

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(first, second);
    assert!(first.markdown);
    assert!(first.text.starts_with("*2026\\-10\\-19*\n\nPANEL 2 \\(TronPanel\\)\n\n"));
    assert!(first.text.contains("Denver ⚠️\nYat: 0 TL \\(0 adet\\)"));
}

#[test]
fn veri_failure_sends_generic_error() {
    let control = control(ScriptedPanel::failing(PanelError::ReportPage { status: 500 }));
    let reply = tokio_test::block_on(control.execute(command("/veri")));
    assert_eq!(reply, BotReply::plain(FAILURE_TEXT));
}

#[test]
fn start_and_abi_do_not_touch_the_panel() {
    let panel = ScriptedPanel::new();
    let calls = panel.calls();
    let control = control(panel);

    let start = tokio_test::block_on(control.execute(command("/start")));
    assert_eq!(
        start.text,
        "🎰 TronPanel Veri Bot\n\n/veri - Günlük TL verileri\n/abi - Özel mesaj"
    );
    let abi = tokio_test::block_on(control.execute(command("/abi")));
    assert_eq!(abi, BotReply::plain("👑 @atmkrnca 👑"));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unknown_command_is_answered_with_help() {
    let route = route_message("/rapor", 42, Some("panel_bot"), &TelegramAppConfig::default());
    let Some(Route::Invalid(text)) = route else {
        panic!("expected invalid route, got {route:?}");
    };
    assert!(text.contains("/rapor"));
    assert!(text.contains("/abi - Özel mesaj"));
}

#[test]
fn commands_for_other_bots_never_reach_the_panel() {
    let access = TelegramAppConfig::default();
    assert_eq!(
        route_message("/veri@other_bot", -100, Some("panel_bot"), &access),
        None
    );
    assert_eq!(
        route_message("/VERI@panel_bot", -100, Some("panel_bot"), &access),
        Some(Route::Command(BotCommand::Report))
    );
}
