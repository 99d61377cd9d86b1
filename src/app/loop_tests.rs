use super::*;
use crate::app::history::{decode, HISTORY_KEY};
use crate::config::PaletteConfig;
use crate::domain::models::{CommandContext, CommandResult, Message, Suggestion};
use crate::domain::service::MockCommandService;
use crate::infrastructure::store::{KeyValueStore, MemoryStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use std::sync::Arc;

fn context() -> CommandContext {
    CommandContext {
        user_id: 2,
        project_id: Some(7),
    }
}

fn permissive_mock() -> MockCommandService {
    let mut mock = MockCommandService::new();
    mock.expect_command_suggestions().returning(|partial| {
        Ok(vec![
            Suggestion::new(format!("{partial} uno"), "primera"),
            Suggestion::new(format!("{partial} dos"), "segunda"),
        ])
    });
    mock.expect_execute_command().returning(|command, _| {
        if command.len() % 3 == 0 {
            Err(anyhow::anyhow!("service unavailable"))
        } else {
            Ok(CommandResult::from_value(serde_json::json!({
                "type": "daily_report_created",
                "message": format!("Reporte para {command}"),
                "report_id": command.len(),
            })))
        }
    });
    mock
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> std::io::Result<Event> {
    Ok(Event::Key(KeyEvent::new(code, modifiers)))
}

#[tokio::test(start_paused = true)]
async fn test_scripted_session_records_history() {
    let mut mock = MockCommandService::new();
    mock.expect_command_suggestions().returning(|_| Ok(Vec::new()));
    mock.expect_execute_command().times(1).returning(|_, _| {
        Ok(CommandResult::Help(Message {
            message: "Comandos disponibles".to_string(),
        }))
    });

    let store = Arc::new(MemoryStore::new());
    let (controller, action_rx) = PaletteController::mount(
        Arc::new(mock),
        store.clone(),
        context(),
        PaletteConfig::default(),
    );
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(16);

    let script = tokio::spawn(async move {
        let pause = || tokio::time::sleep(Duration::from_millis(300));
        event_tx.send(key(KeyCode::Char('k'), KeyModifiers::CONTROL)).await.unwrap();
        pause().await;
        for c in "ayuda".chars() {
            event_tx.send(key(KeyCode::Char(c), KeyModifiers::NONE)).await.unwrap();
        }
        event_tx.send(key(KeyCode::Enter, KeyModifiers::NONE)).await.unwrap();
        pause().await;
        event_tx.send(key(KeyCode::Char('c'), KeyModifiers::CONTROL)).await.unwrap();
    });

    run_loop_with_events(&mut terminal, controller, event_rx, action_rx)
        .await
        .unwrap();
    script.await.unwrap();

    let history = decode(&store.get(HISTORY_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].command, "ayuda");
}

#[tokio::test]
async fn test_closed_event_stream_ends_loop() {
    let (controller, action_rx) = PaletteController::mount(
        Arc::new(MockCommandService::new()),
        Arc::new(MemoryStore::new()),
        context(),
        PaletteConfig::default(),
    );
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(1);
    drop(event_tx);

    run_loop_with_events(&mut terminal, controller, event_rx, action_rx)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let store = Arc::new(MemoryStore::new());
    let (controller, action_rx) = PaletteController::mount(
        Arc::new(permissive_mock()),
        store.clone(),
        context(),
        PaletteConfig {
            focus_delay_ms: 0,
            auto_close_ms: 5,
            ..PaletteConfig::default()
        },
    );
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let event = match rng.gen_range(0..100) {
                0..=4 => Event::Resize(rng.gen_range(10..200), rng.gen_range(5..100)),
                5..=9 => Event::Paste("estado del proyecto".to_string()),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Send Quit
        let _ = event_tx
            .send(key(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await;
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, controller, event_rx, action_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();

    if let Some(blob) = store.get(HISTORY_KEY).unwrap() {
        assert!(decode(&blob).unwrap().len() <= 10);
    }
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..16) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Up,
        3 => KeyCode::Down,
        4 => KeyCode::Tab,
        5 => KeyCode::Backspace,
        6 => KeyCode::Left,
        7 => KeyCode::Delete,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Keep the palette toggling
    if rng.gen_bool(0.05) {
        return Event::Key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}
