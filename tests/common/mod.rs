use std::io::Write;

use calcpro::application::session::CalculatorSession;
use calcpro::infrastructure::recording::RecordingPresenter;
use tempfile::NamedTempFile;

/// Builds a session wired to a recording presenter, returning both so the
/// test can drive the session and inspect what the presentation layer saw.
pub fn recorded_session() -> (CalculatorSession, RecordingPresenter) {
    let presenter = RecordingPresenter::new();
    let session = CalculatorSession::new(Box::new(presenter.clone()));
    (session, presenter)
}

/// Feeds a string of digit/point tokens one at a time.
pub fn enter(session: &mut CalculatorSession, tokens: &str) {
    for token in tokens.chars() {
        session.append(token);
    }
}

/// Writes a command script to a temp file, one command per line. The file
/// lives as long as the returned handle.
pub fn script_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create script file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write script line");
    }
    file.flush().expect("Failed to flush script file");
    file
}
