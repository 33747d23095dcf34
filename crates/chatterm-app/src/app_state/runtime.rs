//! The cooperative event loop.
//!
//! Three inputs are multiplexed: backend updates, terminal events and
//! effect results. Each is applied to the [`App`] to completion before the
//! loop awaits again, so the model has exactly one writer.

use std::sync::Arc;

use chatterm_backend::{AuthorizationState, Backend, Update};
use chatterm_common::ChattermError;
use chatterm_platform::{key_stroke, StorageDirs};
use chatterm_renderer::{RenderSink, TerminalRenderer};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::authorizer::{Answer, Authorizer};

use super::core::App;
use super::effects::{self, Effect, EffectResult};
use super::terminal::TerminalGuard;

const EFFECT_CHANNEL_CAPACITY: usize = 64;

/// Start the backend, run the login prompts, then drive the UI until quit
/// or until the backend closes.
pub async fn run(
    mut app: App,
    backend: Arc<dyn Backend>,
    mut updates: mpsc::Receiver<Update>,
    dirs: StorageDirs,
) -> Result<(), ChattermError> {
    let backend_task = tokio::spawn({
        let backend = Arc::clone(&backend);
        async move {
            if let Err(e) = backend.start(&dirs).await {
                tracing::error!(error = %e, "backend stopped with an error");
            }
        }
    });

    let result = match authorize(&mut app, backend.as_ref(), &mut updates).await {
        Ok(true) => ui_loop(&mut app, &backend, &mut updates).await,
        Ok(false) => {
            tracing::info!("backend closed before authorization completed");
            Ok(())
        }
        Err(e) => Err(e),
    };

    drop(updates);
    if let Err(e) = backend.close().await {
        tracing::warn!(error = %e, "backend close failed");
    }
    if let Err(e) = backend_task.await {
        tracing::warn!(error = %e, "backend task did not finish cleanly");
    }
    result
}

/// Apply updates until the backend is ready, answering its questions on the
/// plain terminal. Returns `false` if it closed first.
async fn authorize(
    app: &mut App,
    backend: &dyn Backend,
    updates: &mut mpsc::Receiver<Update>,
) -> Result<bool, ChattermError> {
    let mut prompt = Authorizer::new(std::io::stdin().lock(), std::io::stdout());

    while let Some(update) = updates.recv().await {
        app.apply_update(&update);
        if !matches!(update, Update::AuthorizationState { .. }) {
            continue;
        }

        let state = app.authorization().clone();
        match state {
            AuthorizationState::Ready => return Ok(true),
            AuthorizationState::Closed => return Ok(false),
            _ => {}
        }

        let Some(answer) = tokio::task::block_in_place(|| prompt.ask(&state))? else {
            continue;
        };
        let sent = match &answer {
            Answer::PhoneNumber(number) => backend.set_phone_number(number).await,
            Answer::Code(code) => backend.check_code(code).await,
            Answer::Password(password) => backend.check_password(password).await,
        };
        if let Err(e) = sent {
            tracing::warn!(error = %e, "authorization answer rejected");
            prompt.notice(&format!("Rejected: {e}"))?;
        }
    }
    Ok(false)
}

async fn ui_loop(
    app: &mut App,
    backend: &Arc<dyn Backend>,
    updates: &mut mpsc::Receiver<Update>,
) -> Result<(), ChattermError> {
    let _guard = TerminalGuard::enter()?;
    let (columns, rows) = crossterm::terminal::size()?;
    let mut renderer = TerminalRenderer::new(std::io::stdout(), columns, rows);
    app.resize(columns, rows);
    app.render(&mut renderer)?;

    let shutdown = CancellationToken::new();
    let (effect_tx, mut effect_rx) = mpsc::channel(EFFECT_CHANNEL_CAPACITY);
    let mut events = EventStream::new();
    tracing::info!(columns, rows, "entering ui loop");

    loop {
        let visible = tokio::select! {
            update = updates.recv() => match update {
                Some(update) => app.apply_update(&update),
                None => {
                    tracing::info!("backend update stream ended");
                    break;
                }
            },
            event = events.next() => match event {
                Some(Ok(event)) => on_terminal_event(app, &mut renderer, event)?,
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(result) = effect_rx.recv() => app.apply_effect_result(result),
        };

        for effect in app.take_effects() {
            spawn_effect(Arc::clone(backend), effect, effect_tx.clone(), shutdown.clone());
        }
        if app.should_exit() {
            break;
        }
        if visible {
            app.render(&mut renderer)?;
        }
    }

    shutdown.cancel();
    tracing::info!("leaving ui loop");
    Ok(())
}

fn on_terminal_event<S: RenderSink>(
    app: &mut App,
    renderer: &mut S,
    event: Event,
) -> Result<bool, ChattermError> {
    match event {
        Event::Key(key) => Ok(key_stroke(&key).is_some_and(|stroke| app.apply_key(stroke))),
        Event::Resize(columns, rows) => {
            renderer.resize(columns, rows)?;
            Ok(app.resize(columns, rows))
        }
        _ => Ok(false),
    }
}

fn spawn_effect(
    backend: Arc<dyn Backend>,
    effect: Effect,
    results: mpsc::Sender<EffectResult>,
    shutdown: CancellationToken,
) {
    tracing::debug!(?effect, "running effect");
    tokio::spawn(async move {
        tokio::select! {
            _ = shutdown.cancelled() => {}
            result = effects::execute(backend.as_ref(), effect) => {
                if let Some(result) = result {
                    if results.send(result).await.is_err() {
                        tracing::debug!("effect result dropped after shutdown");
                    }
                }
            }
        }
    });
}
