use douyin_scribe::application::services::{ConversionPipeline, PipelineError};
use douyin_scribe::domain::InvalidInput;

use crate::helpers::{MockConverter, MockResolver, MockTranscriber, pipeline_with};

const LINK: &str = "https://v.douyin.com/abc";
const VIDEO_URL: &str = "https://cdn/video.mp4";
const AUDIO_URL: &str = "https://cdn/audio.mp3";

#[tokio::test]
async fn given_all_stages_succeed_when_running_then_returns_text_and_video_url() {
    let resolver = MockResolver::succeeding(VIDEO_URL);
    let converter = MockConverter::succeeding(AUDIO_URL);
    let transcriber = MockTranscriber::succeeding("hello world");
    let pipeline = pipeline_with(&resolver, &converter, &transcriber);

    let outcome = pipeline.run(Some(LINK)).await.unwrap();

    assert_eq!(outcome.text, "hello world");
    assert_eq!(outcome.video_url, VIDEO_URL);
    assert_eq!(resolver.calls(), 1);
    assert_eq!(converter.calls(), 1);
    assert_eq!(transcriber.calls(), 1);
}

#[tokio::test]
async fn given_padded_link_when_running_then_resolver_receives_trimmed_link() {
    let resolver = MockResolver::succeeding(VIDEO_URL);
    let converter = MockConverter::succeeding(AUDIO_URL);
    let transcriber = MockTranscriber::succeeding("hello world");
    let pipeline = pipeline_with(&resolver, &converter, &transcriber);

    pipeline.run(Some("  https://v.douyin.com/abc  ")).await.unwrap();

    assert_eq!(resolver.last_link().as_deref(), Some(LINK));
}

#[tokio::test]
async fn given_misconfigured_pipeline_when_running_then_fails_regardless_of_input() {
    let pipeline = ConversionPipeline::misconfigured(vec!["resolver.token"]);

    for input in [None, Some(""), Some("   "), Some(LINK)] {
        let result = pipeline.run(input).await;
        assert!(
            matches!(result, Err(PipelineError::Misconfigured(ref missing)) if missing == &vec!["resolver.token"]),
            "input {:?} gave {:?}",
            input,
            result
        );
    }
}

#[tokio::test]
async fn given_whitespace_link_when_running_then_invalid_input_and_no_stage_runs() {
    let resolver = MockResolver::succeeding(VIDEO_URL);
    let converter = MockConverter::succeeding(AUDIO_URL);
    let transcriber = MockTranscriber::succeeding("hello world");
    let pipeline = pipeline_with(&resolver, &converter, &transcriber);

    let result = pipeline.run(Some(" \t ")).await;

    assert!(matches!(
        result,
        Err(PipelineError::InvalidInput(InvalidInput::EmptyLink))
    ));
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn given_missing_link_when_running_then_invalid_input_missing() {
    let resolver = MockResolver::succeeding(VIDEO_URL);
    let converter = MockConverter::succeeding(AUDIO_URL);
    let transcriber = MockTranscriber::succeeding("hello world");
    let pipeline = pipeline_with(&resolver, &converter, &transcriber);

    let result = pipeline.run(None).await;

    assert!(matches!(
        result,
        Err(PipelineError::InvalidInput(InvalidInput::MissingLink))
    ));
}

#[tokio::test]
async fn given_resolver_fails_when_running_then_later_stages_never_invoked() {
    let resolver = MockResolver::failing();
    let converter = MockConverter::succeeding(AUDIO_URL);
    let transcriber = MockTranscriber::succeeding("hello world");
    let pipeline = pipeline_with(&resolver, &converter, &transcriber);

    let result = pipeline.run(Some(LINK)).await;

    assert!(matches!(result, Err(PipelineError::Resolution(_))));
    assert_eq!(converter.calls(), 0);
    assert_eq!(transcriber.calls(), 0);
}

#[tokio::test]
async fn given_conversion_fails_when_running_then_transcription_never_invoked() {
    let resolver = MockResolver::succeeding(VIDEO_URL);
    let converter = MockConverter::failing();
    let transcriber = MockTranscriber::succeeding("hello world");
    let pipeline = pipeline_with(&resolver, &converter, &transcriber);

    let result = pipeline.run(Some(LINK)).await;

    assert!(matches!(result, Err(PipelineError::Conversion(_))));
    assert_eq!(transcriber.calls(), 0);
}

#[tokio::test]
async fn given_transcription_fails_when_running_then_reports_transcription_error() {
    let resolver = MockResolver::succeeding(VIDEO_URL);
    let converter = MockConverter::succeeding(AUDIO_URL);
    let transcriber = MockTranscriber::failing();
    let pipeline = pipeline_with(&resolver, &converter, &transcriber);

    let result = pipeline.run(Some(LINK)).await;

    assert!(matches!(result, Err(PipelineError::Transcription(_))));
    assert_eq!(transcriber.calls(), 1);
}
