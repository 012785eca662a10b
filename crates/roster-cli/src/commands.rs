//! Handler functions for the roster commands.
//!
//! Each `cmd_*` takes an already-refreshed [`Session`] so its view
//! matches what the service holds, mirrors the change locally on
//! success, and prints a one-line report.

use std::io::Write;
use std::sync::Arc;

use roster_client::{HttpDirectory, Session};
use roster_core::{Member, MemberId};

use crate::cli::{Args, Command};
use crate::error::{Error, Result};

// ============================================================================
// Dispatch
// ============================================================================

/// Runs one parsed invocation to completion.
pub async fn run(args: Args) -> Result<()> {
    let transport = HttpDirectory::new(args.api.clone());
    match args.command {
        Command::List => {
            let session = connect(transport).await?;
            cmd_list(&session)
        }
        Command::Add { name, role } => {
            let mut session = connect(transport).await?;
            cmd_add(&mut session, name, role).await
        }
        Command::Update { id, name, role } => {
            let mut session = connect(transport).await?;
            cmd_update(&mut session, MemberId::new(id), name, role).await
        }
        Command::Remove { id, yes } => {
            let mut session = connect(transport).await?;
            cmd_remove(&mut session, MemberId::new(id), yes).await
        }
        Command::Status => cmd_status(&transport).await,
    }
}

/// Opens a session and pulls the current listing.
async fn connect(transport: HttpDirectory) -> Result<Session> {
    let mut session = Session::new(Arc::new(transport));
    session.refresh().await?;
    tracing::debug!(members = session.members().len(), "listing loaded");
    Ok(session)
}

// ============================================================================
// Command handlers
// ============================================================================

/// Print every member in directory order.
pub fn cmd_list(session: &Session) -> Result<()> {
    print!("{}", render_members(session.members()));
    Ok(())
}

/// Add a member and report the minted id.
pub async fn cmd_add(session: &mut Session, name: String, role: String) -> Result<()> {
    session.set_name(name);
    session.set_role(role);
    let member = session.submit().await?;
    println!(
        "Added member {}: {} ({})",
        member.id, member.name, member.role
    );
    Ok(())
}

/// Change name and/or role of an existing member. Fields not passed
/// keep their current value.
pub async fn cmd_update(
    session: &mut Session,
    id: MemberId,
    name: Option<String>,
    role: Option<String>,
) -> Result<()> {
    if name.is_none() && role.is_none() {
        return Err(Error::usage("nothing to change: pass --name and/or --role"));
    }

    // edit pre-fills the form, so an omitted field rides along unchanged
    session.edit(id)?;
    if let Some(name) = name {
        session.set_name(name);
    }
    if let Some(role) = role {
        session.set_role(role);
    }

    let member = session.submit().await?;
    println!(
        "Updated member {}: {} ({})",
        member.id, member.name, member.role
    );
    Ok(())
}

/// Remove a member, asking first unless `yes` is set.
pub async fn cmd_remove(session: &mut Session, id: MemberId, yes: bool) -> Result<()> {
    let Some(member) = session.view().find(id).cloned() else {
        return Err(roster_client::Error::from(roster_core::Error::MemberNotFound { id }).into());
    };

    if !yes && !ask(&format!("Remove {} ({})?", member.name, member.role))? {
        println!("Nothing removed.");
        return Ok(());
    }

    let removed = session.remove(id).await?;
    println!("Removed member {}: {}", removed.id, removed.name);
    Ok(())
}

/// Check the service answers its health probe.
pub async fn cmd_status(transport: &HttpDirectory) -> Result<()> {
    let health = transport.health().await?;
    println!(
        "{} at {}: {} members",
        health.status,
        transport.base_url(),
        health.members
    );
    Ok(())
}

// ============================================================================
// Terminal helpers
// ============================================================================

/// Puts a yes/no question to the terminal. Defaults to no.
fn ask(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(parse_confirmation(&answer))
}

/// Interprets a typed confirmation; only an explicit yes counts.
pub fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Renders the listing as an aligned table.
pub fn render_members(members: &[Member]) -> String {
    if members.is_empty() {
        return "(no members)\n".to_string();
    }

    let name_width = members
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = format!("{:<6} {:<name_width$} ROLE\n", "ID", "NAME");
    for member in members {
        out.push_str(&format!(
            "{:<6} {:<name_width$} {}\n",
            member.id.value(),
            member.name,
            member.role
        ));
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
