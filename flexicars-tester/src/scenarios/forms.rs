use super::{Check, ScenarioContext};
use crate::timing::TokioSleep;
use anyhow::{Result, ensure};
use flexicars_core::{
    FormError, FormKind, FormPhase, JsonStore, MemoryStore, SearchQuery, SimulatedTransport,
    Submission, drive,
};
use std::collections::BTreeMap;
use std::time::Instant;

fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

fn search_query() -> SearchQuery {
    SearchQuery::from_entries(entries(&[
        ("location", "Bengaluru"),
        ("pickupDate", "2026-11-02"),
        ("returnDate", "2026-11-05"),
        ("carType", "suv"),
    ]))
}

async fn submit(sleeper: TokioSleep, delay_ms: u32, submission: Submission) -> Result<()> {
    let kind = submission.kind;
    let transport = SimulatedTransport::new(sleeper, delay_ms);
    let mut phases = Vec::new();
    let start = Instant::now();
    let receipt = drive(&transport, submission, |phase| phases.push(phase)).await?;
    let elapsed = start.elapsed();

    ensure!(
        phases == [FormPhase::Submitting, FormPhase::Idle],
        "{kind:?} went through {phases:?}"
    );
    ensure!(receipt.kind == kind, "receipt for {:?}", receipt.kind);
    ensure!(
        receipt.message == kind.completion_message(),
        "unexpected receipt {:?}",
        receipt.message
    );
    ensure!(
        elapsed >= sleeper.scaled(delay_ms),
        "{kind:?} acknowledged after {elapsed:?}, before its delay"
    );
    Ok(())
}

async fn forms_run_side_by_side(ctx: &ScenarioContext) -> Result<()> {
    let contact = Submission::new(
        FormKind::Contact,
        entries(&[("firstName", "Meera"), ("email", "meera@example.in")]),
    );
    let (search, contact) = tokio::join!(
        submit(ctx.sleeper, ctx.config.search_delay_ms, search_query().into_submission()),
        submit(ctx.sleeper, ctx.config.contact_delay_ms, contact),
    );
    search?;
    contact
}

fn busy_form_refuses_resubmit() -> Result<()> {
    let busy = FormPhase::Idle.begin()?;
    ensure!(busy == FormPhase::Submitting, "begin gave {busy:?}");
    ensure!(busy.begin() == Err(FormError::Busy), "a busy form accepted a second submit");

    let button = busy.button(FormKind::Contact);
    ensure!(button.busy && button.disabled, "busy button is still live");
    ensure!(button.label == FormKind::Contact.busy_label(), "label {:?}", button.label);

    let idle = busy.finish().button(FormKind::Search);
    ensure!(!idle.busy && !idle.disabled, "finished button is still locked");
    ensure!(idle.label == FormKind::Search.idle_label(), "label {:?}", idle.label);
    Ok(())
}

fn search_is_remembered() -> Result<()> {
    let store = JsonStore::new(MemoryStore::new());
    ensure!(SearchQuery::recall(&store).is_none(), "fresh store recalled a search");
    let query = search_query();
    query.remember(&store);
    ensure!(
        SearchQuery::recall(&store).as_ref() == Some(&query),
        "recalled search differs"
    );
    SearchQuery::forget(&store);
    ensure!(SearchQuery::recall(&store).is_none(), "forgotten search came back");
    Ok(())
}

pub async fn checks(ctx: &ScenarioContext) -> Vec<Check> {
    vec![
        Check::new(
            "search submission",
            submit(ctx.sleeper, ctx.config.search_delay_ms, search_query().into_submission()).await,
        ),
        Check::new(
            "contact submission",
            submit(
                ctx.sleeper,
                ctx.config.contact_delay_ms,
                Submission::new(FormKind::Contact, BTreeMap::new()),
            )
            .await,
        ),
        Check::new("forms run side by side", forms_run_side_by_side(ctx).await),
        Check::new("busy form refuses resubmit", busy_form_refuses_resubmit()),
        Check::new("last search is remembered", search_is_remembered()),
    ]
}
