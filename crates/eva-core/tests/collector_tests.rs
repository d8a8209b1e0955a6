//! Command segment collector tests

use eva_core::collect::{CollectOutcome, CommandSegmentCollector};
use eva_core::config::LocaleBundle;
use eva_foundation::locale::Locale;
use eva_stt::mock::{CaptureStep, RecognizeStep, ScriptedCapture, ScriptedRecognizer};
use eva_tts::mock::{FailingSpeech, NullSpeech, RecordingSpeech};

fn bundle() -> LocaleBundle {
    LocaleBundle::new(Locale::English, "Alex", "Eva")
}

async fn collect(
    capture: &mut ScriptedCapture,
    recognizer: &mut ScriptedRecognizer,
    speech: &mut RecordingSpeech,
) -> CollectOutcome {
    CommandSegmentCollector::default()
        .collect(&bundle(), capture, recognizer, speech)
        .await
}

#[tokio::test]
async fn segments_join_in_order_on_done() {
    let mut capture = ScriptedCapture::hearing(3);
    let mut recognizer =
        ScriptedRecognizer::transcripts(&["turn", "on the lights please", "finished eva"]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(
        outcome,
        CollectOutcome::Completed("turn on the lights please".to_string())
    );
}

#[tokio::test]
async fn silent_first_segment_gives_up_immediately() {
    let mut capture = ScriptedCapture::new(vec![CaptureStep::Timeout]);
    let mut recognizer = ScriptedRecognizer::new(vec![]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(outcome, CollectOutcome::GaveUp);
    assert_eq!(capture.listen_calls(), 1);
    assert_eq!(recognizer.recognize_calls(), 0);
    assert!(speech.spoke_containing("I didn't hear anything"));
}

#[tokio::test]
async fn cancel_discards_buffer_without_recap() {
    let mut capture = ScriptedCapture::hearing(3);
    let mut recognizer = ScriptedRecognizer::transcripts(&["play", "some jazz", "cancel"]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(outcome, CollectOutcome::Cancelled);
    assert!(speech.spoke_containing("Command cancelled"));
    assert!(!speech.spoke_containing("I have:"));
}

#[tokio::test]
async fn third_consecutive_timeout_triggers_recap_then_resets() {
    let mut capture = ScriptedCapture::new(vec![
        CaptureStep::Audio,
        CaptureStep::Timeout,
        CaptureStep::Timeout,
        CaptureStep::Timeout,
        CaptureStep::Audio,
    ]);
    let mut recognizer = ScriptedRecognizer::transcripts(&["turn on the lights", "finished eva"]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(
        outcome,
        CollectOutcome::Completed("turn on the lights".to_string())
    );
    let stills = speech
        .spoken()
        .iter()
        .filter(|line| line.contains("I'm still listening"))
        .count();
    let recaps = speech
        .spoken()
        .iter()
        .filter(|line| line.contains("I have: turn on the lights"))
        .count();
    assert_eq!(stills, 2);
    assert_eq!(recaps, 1);
}

#[tokio::test]
async fn done_with_empty_buffer_gives_up() {
    let mut capture = ScriptedCapture::hearing(1);
    let mut recognizer = ScriptedRecognizer::transcripts(&["finished eva"]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(outcome, CollectOutcome::GaveUp);
    assert!(speech.spoke_containing("You didn't give me a command"));
}

#[tokio::test]
async fn exit_word_terminates_with_spoken_farewell() {
    let mut capture = ScriptedCapture::hearing(1);
    let mut recognizer = ScriptedRecognizer::transcripts(&["please quit now"]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    match outcome {
        CollectOutcome::Exit(farewell) => {
            assert!(farewell.contains("Good bye Alex"));
            assert!(speech.spoke_containing("Good bye Alex"));
        }
        other => panic!("expected Exit, got {other:?}"),
    }
}

#[tokio::test]
async fn exit_beats_plain_segments_even_with_content() {
    let mut capture = ScriptedCapture::hearing(2);
    let mut recognizer = ScriptedRecognizer::transcripts(&["turn on", "now leave"]);
    let mut speech = NullSpeech;

    let outcome = CommandSegmentCollector::default()
        .collect(&bundle(), &mut capture, &mut recognizer, &mut speech)
        .await;

    assert!(matches!(outcome, CollectOutcome::Exit(_)));
}

#[tokio::test]
async fn unrecognized_segment_mid_command_prompts_and_continues() {
    let mut capture = ScriptedCapture::hearing(3);
    let mut recognizer = ScriptedRecognizer::new(vec![
        RecognizeStep::Heard("turn on", 0.9),
        RecognizeStep::Miss,
        RecognizeStep::Heard("finished eva", 0.9),
    ]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(outcome, CollectOutcome::Completed("turn on".to_string()));
    assert!(speech.spoke_containing("I didn't catch that part"));
}

#[tokio::test]
async fn unrecognized_first_segment_gives_up() {
    let mut capture = ScriptedCapture::hearing(1);
    let mut recognizer = ScriptedRecognizer::new(vec![RecognizeStep::Miss]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(outcome, CollectOutcome::GaveUp);
    assert!(speech.spoke_containing("I couldn't hear you clearly"));
}

#[tokio::test]
async fn recognition_service_error_is_treated_as_a_miss() {
    let mut capture = ScriptedCapture::hearing(3);
    let mut recognizer = ScriptedRecognizer::new(vec![
        RecognizeStep::Heard("turn on", 0.9),
        RecognizeStep::ServiceError("api quota".into()),
        RecognizeStep::Heard("finished eva", 0.9),
    ]);
    let mut speech = NullSpeech;

    let outcome = CommandSegmentCollector::default()
        .collect(&bundle(), &mut capture, &mut recognizer, &mut speech)
        .await;

    assert_eq!(outcome, CollectOutcome::Completed("turn on".to_string()));
}

#[tokio::test]
async fn long_commands_get_a_spoken_preview_before_processing() {
    let long_segment = "x".repeat(120);
    let mut capture = ScriptedCapture::hearing(2);
    let mut recognizer = ScriptedRecognizer::new(vec![
        RecognizeStep::Heard(Box::leak(long_segment.clone().into_boxed_str()), 0.9),
        RecognizeStep::Heard("finished eva", 0.9),
    ]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(outcome, CollectOutcome::Completed(long_segment));
    assert!(speech.spoke_containing("Processing: "));
    assert!(speech.spoke_containing("..."));
}

#[tokio::test]
async fn feedback_tapers_with_segment_count() {
    let mut capture = ScriptedCapture::hearing(5);
    let mut recognizer = ScriptedRecognizer::transcripts(&[
        "one",
        "two",
        "three",
        "four",
        "finished eva",
    ]);
    let mut speech = RecordingSpeech::new();

    let outcome = collect(&mut capture, &mut recognizer, &mut speech).await;

    assert_eq!(outcome, CollectOutcome::Completed("one two three four".to_string()));
    let acks = speech
        .spoken()
        .iter()
        .filter(|line| line.contains("Got it"))
        .count();
    let pings = speech
        .spoken()
        .iter()
        .filter(|line| line.contains("Still listening"))
        .count();
    assert_eq!(acks, 1);
    assert_eq!(pings, 1);
}

#[tokio::test]
async fn consecutive_collections_start_fresh() {
    let collector = CommandSegmentCollector::default();
    let bundle = bundle();

    let mut capture = ScriptedCapture::hearing(2);
    let mut recognizer = ScriptedRecognizer::transcripts(&["half a command", "cancel"]);
    let mut speech = NullSpeech;
    let first = collector
        .collect(&bundle, &mut capture, &mut recognizer, &mut speech)
        .await;
    assert_eq!(first, CollectOutcome::Cancelled);

    let mut capture = ScriptedCapture::hearing(2);
    let mut recognizer = ScriptedRecognizer::transcripts(&["new command", "finished eva"]);
    let second = collector
        .collect(&bundle, &mut capture, &mut recognizer, &mut speech)
        .await;
    // Nothing from the cancelled buffer leaks into the next invocation.
    assert_eq!(second, CollectOutcome::Completed("new command".to_string()));
}

#[tokio::test]
async fn swahili_kwaheri_ends_the_session() {
    let bundle = LocaleBundle::new(Locale::Swahili, "Amina", "Eva");
    let mut capture = ScriptedCapture::hearing(1);
    let mut recognizer = ScriptedRecognizer::transcripts(&["kwaheri eva"]);
    let mut speech = RecordingSpeech::new();

    let outcome = CommandSegmentCollector::default()
        .collect(&bundle, &mut capture, &mut recognizer, &mut speech)
        .await;

    // "kwaheri" is a dismissal, not command content.
    assert!(matches!(outcome, CollectOutcome::Exit(_)));
    assert!(speech.spoke_containing("Kwaheri Amina"));
}

#[tokio::test]
async fn synthesis_failures_never_abort_collection() {
    let mut capture = ScriptedCapture::hearing(2);
    let mut recognizer = ScriptedRecognizer::transcripts(&["turn on", "finished eva"]);
    let mut speech = FailingSpeech::default();

    let outcome = CommandSegmentCollector::default()
        .collect(&bundle(), &mut capture, &mut recognizer, &mut speech)
        .await;

    assert_eq!(outcome, CollectOutcome::Completed("turn on".to_string()));
    assert!(speech.attempts() > 0);
}
