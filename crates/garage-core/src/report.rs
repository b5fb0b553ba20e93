//! ガレージ操作の報告先
//!
//! ガレージは操作ごとに1行ずつテキストを報告する。
//! 出力先は標準出力、メモリバッファ、tracing のいずれかを選べる。

use tracing::info;

/// 行単位の報告先
pub trait ReportSink {
    fn line(&mut self, line: &str);

    /// 複数行テキストを行ごとに報告
    fn multiline(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }
}

/// 標準出力に書き出す
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// メモリ上に保持する（テスト・埋め込み用）
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 保持している行を取り出して空にする
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl ReportSink for MemorySink {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// tracing の INFO イベントとして報告する
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn line(&mut self, line: &str) {
        info!(target: "garage::report", "{}", line);
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn line(&mut self, line: &str) {
        (**self).line(line);
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn line(&mut self, line: &str) {
        (**self).line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_lines() {
        let mut sink = MemorySink::new();
        sink.line("first");
        sink.multiline("second\nthird");
        assert_eq!(sink.lines(), ["first", "second", "third"]);

        let taken = sink.take();
        assert_eq!(taken.len(), 3);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        fn emit(mut sink: impl ReportSink) {
            sink.line("via reference");
        }

        let mut sink = MemorySink::new();
        emit(&mut sink);
        assert_eq!(sink.lines(), ["via reference"]);
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut memory = MemorySink::new();
        {
            let mut boxed: Box<dyn ReportSink + '_> = Box::new(&mut memory);
            boxed.multiline("boxed\nsink");
        }
        assert_eq!(memory.lines(), ["boxed", "sink"]);
    }

    #[test]
    fn test_tracing_sink_accepts_lines() {
        // 購読者がいなくても報告は捨てられるだけで失敗しない
        let mut sink = TracingSink;
        sink.line("Garage emptied. 0 vehicle(s) removed.");
        sink.multiline("first\nsecond");
    }
}
