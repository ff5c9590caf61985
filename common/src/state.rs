//! UI非依存のクライアント状態遷移
//!
//! WebとデスクトップはこのreducerをとおしてUI状態を更新する。
//! モーダルダイアログを出さずに通知を状態として持つことで、
//! エラー経路を画面なしで単体テストできる

use crate::types::{HistoryEntry, UploadResult};

/// ユーザーへ提示する非ブロッキング通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserNotice {
    /// ファイル未選択のままアップロードが要求された
    MissingFile,
    /// アップロードが失敗した（ネットワークエラーまたは非2xx）
    UploadFailed,
}

impl UserNotice {
    pub fn message(&self) -> &'static str {
        match self {
            UserNotice::MissingFile => "Please select a CSV file",
            UserNotice::UploadFailed => "Upload failed. Is the backend running?",
        }
    }
}

/// 画面が描画する状態のすべて。ページ再読込で破棄される
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    /// 現在表示中のデータセット
    pub dataset: Option<UploadResult>,
    /// 直近のアップロード履歴（新しい順・最大5件、並びはバックエンド任せ）
    pub history: Vec<HistoryEntry>,
    pub notice: Option<UserNotice>,
}

impl ClientState {
    /// ファイル未選択でアップロードが要求された。
    /// 呼び出し側はネットワークへ出てはならない
    pub fn upload_blocked_no_file(&mut self) {
        self.notice = Some(UserNotice::MissingFile);
    }

    pub fn upload_succeeded(&mut self, result: UploadResult) {
        self.dataset = Some(result);
        self.notice = None;
    }

    /// 失敗時は直前のデータセットを表示したままにする
    pub fn upload_failed(&mut self) {
        self.notice = Some(UserNotice::UploadFailed);
    }

    pub fn history_loaded(&mut self, entries: Vec<HistoryEntry>) {
        self.history = entries;
    }

    /// 履歴取得の失敗はユーザーへ通知せず、表示中のリストも変えない
    pub fn history_failed(&mut self) {}

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(total: u64) -> UploadResult {
        UploadResult {
            total_equipment: total,
            ..Default::default()
        }
    }

    fn sample_history(ids: &[i64]) -> Vec<HistoryEntry> {
        ids.iter()
            .map(|id| HistoryEntry {
                id: *id,
                filename: format!("batch_{id}.csv"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_upload_without_file_sets_missing_file_notice() {
        let mut state = ClientState::default();
        state.upload_blocked_no_file();

        assert_eq!(state.notice, Some(UserNotice::MissingFile));
        assert_eq!(
            state.notice.unwrap().message(),
            "Please select a CSV file"
        );
        assert!(state.dataset.is_none());
    }

    #[test]
    fn test_upload_success_replaces_dataset_and_clears_notice() {
        let mut state = ClientState::default();
        state.upload_blocked_no_file();

        state.upload_succeeded(sample_result(4));
        assert!(state.notice.is_none());
        assert_eq!(state.dataset.as_ref().unwrap().total_equipment, 4);

        state.upload_succeeded(sample_result(9));
        assert_eq!(state.dataset.as_ref().unwrap().total_equipment, 9);
    }

    #[test]
    fn test_upload_failure_keeps_previous_dataset() {
        let mut state = ClientState::default();
        state.upload_succeeded(sample_result(4));

        state.upload_failed();
        assert_eq!(
            state.notice.unwrap().message(),
            "Upload failed. Is the backend running?"
        );
        // 直前のデータセットは表示されたまま
        assert_eq!(state.dataset.as_ref().unwrap().total_equipment, 4);
    }

    #[test]
    fn test_history_failure_is_silent_and_keeps_list() {
        let mut state = ClientState::default();
        state.history_loaded(sample_history(&[3, 2, 1]));

        state.history_failed();
        assert!(state.notice.is_none());
        assert_eq!(state.history.len(), 3);
        assert_eq!(state.history[0].id, 3);
    }

    #[test]
    fn test_history_loaded_replaces_list() {
        let mut state = ClientState::default();
        state.history_loaded(sample_history(&[2, 1]));
        state.history_loaded(sample_history(&[5, 4, 3, 2, 1]));

        assert_eq!(state.history.len(), 5);
        assert_eq!(state.history[0].id, 5);
    }

    #[test]
    fn test_dismiss_notice() {
        let mut state = ClientState::default();
        state.upload_blocked_no_file();

        state.dismiss_notice();
        assert!(state.notice.is_none());
    }
}
