use super::{Check, ScenarioContext};
use crate::timing::TokioSleep;
use anyhow::{Result, ensure};
use flexicars_core::{
    NoticeBoard, NoticeId, NoticeTiming, Severity, Sleep, connectivity_notice,
};
use std::cell::RefCell;

fn duplicates_stay_separate() -> Result<()> {
    let mut board = NoticeBoard::new();
    let first = board.push("No internet connection", Severity::Warning);
    let second = board.push("No internet connection", Severity::Warning);
    ensure!(first != second, "duplicate pushes shared an id");
    ensure!(board.len() == 2, "expected two notices, got {}", board.len());
    ensure!(board.remove(first), "first notice was not removable");
    ensure!(board.contains(second), "removing one notice dropped the other");
    ensure!(!board.remove(first), "a notice was removed twice");
    Ok(())
}

fn steps_cover_the_lifetime(timing: NoticeTiming) -> Result<()> {
    let total: u32 = timing.steps().iter().map(|(wait, _)| wait).sum();
    ensure!(
        total == timing.lifetime_ms(),
        "steps sum to {total}ms but lifetime is {}ms",
        timing.lifetime_ms()
    );
    Ok(())
}

fn connectivity_messages() -> Result<()> {
    let (offline, offline_severity) = connectivity_notice(false);
    let (online, online_severity) = connectivity_notice(true);
    ensure!(offline_severity.class() == "alert-warning", "offline is {offline_severity:?}");
    ensure!(online_severity.class() == "alert-success", "online is {online_severity:?}");
    ensure!(offline != online, "both states share one message");
    Ok(())
}

struct Expiry {
    id: NoticeId,
    removed: bool,
    remaining: Vec<NoticeId>,
}

async fn expire(
    board: &RefCell<NoticeBoard>,
    log: &RefCell<Vec<Expiry>>,
    sleeper: TokioSleep,
    id: NoticeId,
    offset_ms: u32,
    timing: NoticeTiming,
) {
    sleeper.sleep(offset_ms).await;
    for (wait, _) in timing.steps() {
        sleeper.sleep(wait).await;
    }
    let mut board = board.borrow_mut();
    let removed = board.remove(id);
    log.borrow_mut().push(Expiry {
        id,
        removed,
        remaining: board.notices().iter().map(|notice| notice.id).collect(),
    });
}

async fn staggered_expiry(ctx: &ScenarioContext) -> Result<()> {
    let board = RefCell::new(NoticeBoard::new());
    let log = RefCell::new(Vec::new());
    let (first, second) = {
        let mut board = board.borrow_mut();
        let (message, severity) = connectivity_notice(false);
        (board.push(message, severity), board.push(message, severity))
    };
    let timing = ctx.config.toast;
    tokio::join!(
        expire(&board, &log, ctx.sleeper, first, 0, timing),
        expire(&board, &log, ctx.sleeper, second, timing.enter_delay_ms, timing),
    );

    let log = log.into_inner();
    ensure!(log.len() == 2, "expected two expiries, saw {}", log.len());
    ensure!(log.iter().all(|entry| entry.removed), "a toast was already gone");
    let other = if log[0].id == first { second } else { first };
    ensure!(
        log[0].remaining == vec![other],
        "first expiry left {:?}",
        log[0].remaining
    );
    ensure!(board.borrow().is_empty(), "toasts outlived their timers");
    Ok(())
}

pub async fn checks(ctx: &ScenarioContext) -> Vec<Check> {
    vec![
        Check::new("duplicates stay separate", duplicates_stay_separate()),
        Check::new(
            "configured steps cover the lifetime",
            steps_cover_the_lifetime(ctx.config.toast),
        ),
        Check::new(
            "late entry still covers the lifetime",
            steps_cover_the_lifetime(NoticeTiming {
                enter_delay_ms: 500,
                leave_after_ms: 200,
                exit_ms: 50,
            }),
        ),
        Check::new("connectivity notices", connectivity_messages()),
        Check::new("staggered toasts expire independently", staggered_expiry(ctx).await),
    ]
}
