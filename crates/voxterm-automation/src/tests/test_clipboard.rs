use crate::clipboard::{ClipboardBridge, MemoryClipboard, SystemClipboard};
use rand::{distributions::Alphanumeric, Rng, SeedableRng};
use serial_test::serial;

const AWKWARD_PAYLOADS: &[&str] = &[
    "plain text",
    "line one\nline two\r\nline three",
    "tabs\tand\tmore\ttabs",
    "'single' and \"double\" quotes",
    "backticks `cmd` and $(subshell) and \\backslashes\\",
    "非 ASCII テキスト — emoji 🎤 and accents éàü",
    "",
];

#[tokio::test]
async fn memory_clipboard_round_trips_awkward_payloads() {
    let clipboard = MemoryClipboard::new();
    for payload in AWKWARD_PAYLOADS {
        clipboard.write_text(payload).await.unwrap();
        assert_eq!(clipboard.read_text().await.unwrap(), *payload);
    }
    assert_eq!(clipboard.write_count(), AWKWARD_PAYLOADS.len() as u64);
}

#[tokio::test]
async fn generated_payloads_survive_intact() {
    let clipboard = MemoryClipboard::new();
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let len = rng.gen_range(1..4096);
        let payload: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        clipboard.write_text(&payload).await.unwrap();
        assert_eq!(clipboard.read_text().await.unwrap(), payload);
    }
}

#[tokio::test]
async fn large_payloads_survive_intact() {
    let clipboard = MemoryClipboard::new();
    let payload: String = "0123456789\n".repeat(20_000);
    clipboard.write_text(&payload).await.unwrap();
    assert_eq!(clipboard.read_text().await.unwrap(), payload);
}

// Exercises the real OS clipboard, which is process-wide shared state; runs
// serially and only where a desktop session exists.
#[tokio::test]
#[serial]
#[ignore = "requires a desktop session with a system clipboard"]
async fn system_clipboard_round_trips_awkward_payloads() {
    let clipboard = SystemClipboard::new();
    for payload in AWKWARD_PAYLOADS.iter().filter(|p| !p.is_empty()) {
        clipboard.write_text(payload).await.unwrap();
        assert_eq!(clipboard.read_text().await.unwrap(), *payload);
    }
}
