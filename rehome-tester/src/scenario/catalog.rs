use anyhow::{Result, ensure};
use rehome_core::{ItemStore, KeyValueBackend};

use super::{Fixture, Scenario};

pub fn all() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "lamp-claim",
            "Claim a donated lamp end to end",
            lamp_claim,
        ),
        Scenario::new(
            "donated-claim-durable",
            "A claimed donation stays gone after remount",
            donated_claim_durable,
        ),
        Scenario::new(
            "placeholder-claim-session",
            "A claimed seed listing returns after remount",
            placeholder_claim_session,
        ),
        Scenario::new(
            "cancel-keeps-lists",
            "Cancelling a claim leaves both lists untouched",
            cancel_keeps_lists,
        ),
        Scenario::new(
            "cross-grid-sync",
            "A second grid drops an item claimed elsewhere",
            cross_grid_sync,
        ),
        Scenario::new(
            "removal-monotonic",
            "Removed ids never come back",
            removal_monotonic,
        ),
        Scenario::new(
            "resync-idempotent",
            "Resyncing without writes changes nothing",
            resync_idempotent,
        ),
        Scenario::new(
            "corrupt-storage",
            "Unreadable storage falls back to seed listings",
            corrupt_storage,
        ),
    ]
}

fn lamp_claim(fx: &Fixture) -> Result<()> {
    fx.donate("d1", "Lamp");
    let grid = fx.mount();
    ensure!(grid.request_claim("d1"), "Lamp is not listed");

    let state = grid.snapshot();
    ensure!(state.confirm_open, "confirm dialog did not open");
    ensure!(state.target_name() == "Lamp", "confirm dialog names '{}'", state.target_name());

    grid.confirm_claim();
    let state = grid.snapshot();
    ensure!(state.success_open, "success dialog did not open");
    ensure!(
        grid.rendered_names().iter().all(|name| name != "Lamp"),
        "Lamp still rendered after claim"
    );
    ensure!(fx.store.list().is_empty(), "Lamp still persisted");
    Ok(())
}

fn donated_claim_durable(fx: &Fixture) -> Result<()> {
    fx.donate("d1", "Lamp");
    fx.donate("d2", "Chair");
    {
        let grid = fx.mount();
        grid.request_claim("d1");
        grid.confirm_claim();
    }
    let fresh = fx.mount();
    ensure!(
        fresh.rendered_names().iter().all(|name| name != "Lamp"),
        "claimed donation reappeared"
    );
    ensure!(fresh.snapshot().donated_items.len() == 1, "Chair missing");
    Ok(())
}

fn placeholder_claim_session(fx: &Fixture) -> Result<()> {
    let seeds = fx.config.placeholders.len();
    {
        let grid = fx.mount();
        ensure!(grid.request_claim("placeholder-3"), "seed listing not found");
        grid.confirm_claim();
        ensure!(
            grid.snapshot().placeholder_items.len() == seeds - 1,
            "seed listing not removed for the session"
        );
    }
    let fresh = fx.mount();
    ensure!(
        fresh.snapshot().placeholder_items.len() == seeds,
        "seed list not restored on remount"
    );
    Ok(())
}

fn cancel_keeps_lists(fx: &Fixture) -> Result<()> {
    fx.donate("d1", "Lamp");
    let grid = fx.mount();
    let before = grid.snapshot();
    for id in ["d1", "placeholder-0"] {
        grid.request_claim(id);
        grid.cancel_claim();
    }
    let after = grid.snapshot();
    ensure!(after.donated_items == before.donated_items, "donations changed");
    ensure!(after.placeholder_items == before.placeholder_items, "seed listings changed");
    ensure!(after.claim_target.is_none(), "claim target survived cancel");
    ensure!(fx.store.list().len() == 1, "store changed");
    Ok(())
}

fn cross_grid_sync(fx: &Fixture) -> Result<()> {
    fx.donate("d1", "Lamp");
    let grid_a = fx.mount();
    let grid_b = fx.mount();
    grid_a.request_claim("d1");
    grid_a.confirm_claim();
    ensure!(
        grid_b.rendered_names().iter().all(|name| name != "Lamp"),
        "second grid still shows Lamp"
    );
    ensure!(!grid_b.snapshot().success_open, "second grid opened a success dialog");
    Ok(())
}

fn removal_monotonic(fx: &Fixture) -> Result<()> {
    for idx in 0..5 {
        fx.donate(&format!("d{idx}"), &format!("Item {idx}"));
    }
    let mut removed = Vec::new();
    for id in ["d2", "d4", "d2", "ghost", "d0"] {
        fx.store.remove(id);
        removed.push(id);
        let listed = fx.store.list();
        for gone in &removed {
            ensure!(listed.iter().all(|item| item.id != *gone), "{gone} reappeared");
        }
    }
    ensure!(fx.store.list().len() == 2, "unexpected survivors");
    Ok(())
}

fn resync_idempotent(fx: &Fixture) -> Result<()> {
    fx.donate("d1", "Lamp");
    fx.donate("d2", "Chair");
    let grid = fx.mount();
    grid.resync();
    let once = grid.snapshot();
    grid.resync();
    ensure!(grid.snapshot() == once, "second resync changed state");
    ensure!(once.donated_items.len() == 2, "duplicates after resync");
    Ok(())
}

fn corrupt_storage(fx: &Fixture) -> Result<()> {
    fx.backend.set(&fx.config.storage_key, "{not json")?;
    let grid = fx.mount();
    let state = grid.snapshot();
    ensure!(!state.loading, "grid stuck loading");
    ensure!(state.donated_items.is_empty(), "garbage surfaced as donations");
    ensure!(
        state.listings().len() == fx.config.placeholders.len(),
        "seed listings missing"
    );
    Ok(())
}
