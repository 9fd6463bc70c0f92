use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("codechat.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("codechat.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("codechat.client.request_duration_seconds");
pub(crate) static CLIENT_MISSING_TEXT: Counter = Counter::new("codechat.client.missing_text");
pub(crate) static CLIENT_INPUT_TOKENS: Counter = Counter::new("codechat.client.input_tokens");
pub(crate) static CLIENT_OUTPUT_TOKENS: Counter = Counter::new("codechat.client.output_tokens");

pub(crate) static CHAT_COMMANDS: Counter = Counter::new("codechat.chat.commands");
pub(crate) static CHAT_TURNS: Counter = Counter::new("codechat.chat.turns");
pub(crate) static CHAT_RESETS: Counter = Counter::new("codechat.chat.resets");

pub(crate) static INGEST_FILES: Counter = Counter::new("codechat.ingest.files");
pub(crate) static INGEST_REJECTIONS: Counter = Counter::new("codechat.ingest.rejections");
pub(crate) static INGEST_TREE_FILES: Moments = Moments::new("codechat.ingest.tree_files");
pub(crate) static INGEST_SPREADSHEET_ROWS: Moments =
    Moments::new("codechat.ingest.spreadsheet_rows");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);
    collector.register_counter(&CLIENT_MISSING_TEXT);
    collector.register_counter(&CLIENT_INPUT_TOKENS);
    collector.register_counter(&CLIENT_OUTPUT_TOKENS);

    collector.register_counter(&CHAT_COMMANDS);
    collector.register_counter(&CHAT_TURNS);
    collector.register_counter(&CHAT_RESETS);

    collector.register_counter(&INGEST_FILES);
    collector.register_counter(&INGEST_REJECTIONS);
    collector.register_moments(&INGEST_TREE_FILES);
    collector.register_moments(&INGEST_SPREADSHEET_ROWS);
}
