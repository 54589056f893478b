// 密码询问
// 窗口内共享一个弹窗，同一时刻最多一个待处理请求

use tokio::sync::oneshot;
use tracing::debug;

/// 发起询问的文件条目
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeRequester {
    pub file_id: String,
    pub filename: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChallengeError {
    #[error("a password challenge for {pending} is already open")]
    Busy { pending: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeOutcome {
    Resolved,
    Cancelled,
}

/// 单次询问的结果通道
#[derive(Debug)]
pub struct ChallengeTicket {
    receiver: oneshot::Receiver<String>,
}

impl ChallengeTicket {
    /// 取消时返回 None
    pub async fn wait(self) -> Option<String> {
        self.receiver.await.ok()
    }
}

#[derive(Debug)]
struct PendingChallenge {
    requester: ChallengeRequester,
    responder: oneshot::Sender<String>,
}

#[derive(Debug, Default)]
pub struct PasswordChallenge {
    pending: Option<PendingChallenge>,
}

impl PasswordChallenge {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开弹窗；已有待处理请求时拒绝，原请求保持不变
    pub fn request_password(
        &mut self,
        requester: ChallengeRequester,
    ) -> Result<ChallengeTicket, ChallengeError> {
        if let Some(pending) = &self.pending {
            return Err(ChallengeError::Busy {
                pending: pending.requester.filename.clone(),
            });
        }
        let (responder, receiver) = oneshot::channel();
        debug!("[Challenge] Opened for {}", requester.file_id);
        self.pending = Some(PendingChallenge {
            requester,
            responder,
        });
        Ok(ChallengeTicket { receiver })
    }

    /// 空输入等同取消
    pub fn confirm(&mut self, input: &str) -> ChallengeOutcome {
        if input.is_empty() {
            self.cancel();
            return ChallengeOutcome::Cancelled;
        }
        match self.pending.take() {
            Some(pending) => {
                if pending.responder.send(input.to_string()).is_err() {
                    debug!(
                        "[Challenge] Requester for {} is gone",
                        pending.requester.file_id
                    );
                }
                ChallengeOutcome::Resolved
            }
            None => ChallengeOutcome::Cancelled,
        }
    }

    /// 丢弃发送端，请求方收到 None
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("[Challenge] Cancelled for {}", pending.requester.file_id);
        }
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_requester(&self) -> Option<&ChallengeRequester> {
        self.pending.as_ref().map(|p| &p.requester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requester(id: &str) -> ChallengeRequester {
        ChallengeRequester {
            file_id: id.to_string(),
            filename: format!("{}.txt", id),
        }
    }

    #[tokio::test]
    async fn test_confirm_delivers_password_once() {
        let mut challenge = PasswordChallenge::new();
        let ticket = challenge.request_password(requester("a")).unwrap();
        assert!(challenge.is_open());

        assert_eq!(challenge.confirm("secret"), ChallengeOutcome::Resolved);
        assert!(!challenge.is_open());
        assert_eq!(ticket.wait().await, Some("secret".to_string()));

        // 弹窗不保留密码
        assert_eq!(challenge.confirm("secret"), ChallengeOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_cancel_and_empty_input_yield_none() {
        let mut challenge = PasswordChallenge::new();
        let ticket = challenge.request_password(requester("a")).unwrap();
        challenge.cancel();
        assert_eq!(ticket.wait().await, None);

        let ticket = challenge.request_password(requester("b")).unwrap();
        assert_eq!(challenge.confirm(""), ChallengeOutcome::Cancelled);
        assert_eq!(ticket.wait().await, None);
        assert!(!challenge.is_open());
    }

    #[tokio::test]
    async fn test_second_request_is_rejected() {
        let mut challenge = PasswordChallenge::new();
        let first = challenge.request_password(requester("a")).unwrap();

        let second = challenge.request_password(requester("b"));
        assert_eq!(
            second.unwrap_err(),
            ChallengeError::Busy {
                pending: "a.txt".to_string()
            }
        );
        assert_eq!(challenge.pending_requester(), Some(&requester("a")));

        challenge.confirm("pw");
        assert_eq!(first.wait().await, Some("pw".to_string()));
    }
}
