//! Undo/Redo Snapshotting Demonstration
//!
//! This example walks through the public memento API over a singular
//! attribute-holder structure.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Capturing filtered snapshots onto the history stack
//! 2. Inspecting effective changes before deciding to undo
//! 3. Restoring one step back (removing attributes added in between)
//! 4. Restarting to the first ever-captured state
//! 5. Ignore configuration keeping attributes out of snapshots

use memento_core::logging::{init, Profile};
use memento_core::{
    render_change_summary, AttributeHolder, AttributeMap, AttributeValue, Memento, SnapshotConfig,
};

/// A small host structure: a form with named fields
#[derive(Debug, Default, Clone)]
struct Form {
    fields: AttributeMap,
}

impl Form {
    fn set(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.fields.insert(name.to_string(), value.into());
    }
}

impl AttributeHolder for Form {
    fn attributes(&self) -> AttributeMap {
        self.fields.clone()
    }

    fn set_attributes(&mut self, attrs: AttributeMap) {
        self.fields.extend(attrs);
    }

    fn unset_attribute(&mut self, name: &str) {
        self.fields.remove(name);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== Memento Undo Demo (v{}) ===\n", memento_core::version());

    // ===== Part 1: Capture =====
    println!("## Part 1: Capture\n");

    let mut form = Form::default();
    form.set("title", "Quarterly report");
    form.set("owner", "alice");
    form.set("session_token", "tok-123");

    let config = SnapshotConfig::with_ignore(["session_token"]);
    let mut memento = Memento::for_holder(form, config);

    memento.store();
    println!("✓ Captured initial state ({} snapshot)", memento.history_len());
    let snapshot = memento.previous_state().expect("snapshot after store");
    assert!(!snapshot.attributes().contains_key("session_token"));
    println!("  session_token excluded by ignore config\n");

    // ===== Part 2: Mutate and inspect changes =====
    println!("## Part 2: Changes\n");

    {
        let form = memento.adapter_mut().structure_mut();
        form.set("title", "Quarterly report (draft 2)");
        form.set("reviewer", "bob");
    }

    let changed = memento.changes()?;
    println!("Effective changes since the snapshot:");
    for (name, value) in &changed {
        println!("  {} = {}", name, value);
    }
    println!();

    // ===== Part 3: Undo one step =====
    println!("## Part 3: Restore\n");

    memento.restore(None);
    let form = memento.adapter().structure();
    assert_eq!(
        form.attributes().get("title"),
        Some(&AttributeValue::from("Quarterly report"))
    );
    assert!(!form.attributes().contains_key("reviewer"));
    println!("✓ Title reverted, reviewer removed\n");

    // ===== Part 4: Restart =====
    println!("## Part 4: Restart\n");

    for draft in 2..=4 {
        memento.store();
        memento
            .adapter_mut()
            .structure_mut()
            .set("title", format!("Quarterly report (draft {})", draft));
    }
    println!("Stored {} more snapshots while editing", memento.history_len());

    // Render what changed relative to the newest snapshot before jumping back
    let baseline = memento
        .previous_state()
        .expect("snapshot present")
        .attributes()
        .clone();
    let tree = memento_core::diff_maps(&baseline, &memento.adapter().structure().attributes())?;
    println!("{}", render_change_summary(&tree));

    memento.restart(None);
    assert_eq!(memento.history_len(), 0);
    assert_eq!(
        memento.adapter().structure().attributes().get("title"),
        Some(&AttributeValue::from("Quarterly report"))
    );
    println!("✓ Back to the first captured state, history discarded");

    Ok(())
}
