// 文件记录数据模型
// 服务端 /api/list.json 返回的文件元数据（客户端只读）

use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// 文件可见性
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Visibility {
    #[default]
    #[serde(alias = "public")]
    Public,
    #[serde(alias = "private")]
    Private,
}

impl Visibility {
    pub const ALL: [Visibility; 2] = [Visibility::Public, Visibility::Private];

    /// 上传时 aqa-visibility 头的取值
    pub fn directive(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// 剩余可下载次数
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemainingDownloads {
    Count(u64),
    #[default]
    Infinite,
}

impl std::fmt::Display for RemainingDownloads {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemainingDownloads::Count(count) => write!(f, "{}", count),
            RemainingDownloads::Infinite => write!(f, "infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for RemainingDownloads {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Count(u64),
            Text(String),
            Tagged {
                #[serde(rename = "Count")]
                count: u64,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Count(count) | Repr::Tagged { count } => Ok(RemainingDownloads::Count(count)),
            Repr::Text(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("infinite") {
                    Ok(RemainingDownloads::Infinite)
                } else {
                    text.parse::<u64>()
                        .map(RemainingDownloads::Count)
                        .map_err(|_| D::Error::custom(format!("invalid download count `{}`", text)))
                }
            }
        }
    }
}

/// 文件有效期：无限或从上传时刻起的时长（二者互斥）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifetime {
    #[default]
    Infinite,
    Duration(Duration),
}

impl Lifetime {
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Lifetime::Infinite => None,
            Lifetime::Duration(duration) => Some(*duration),
        }
    }

    /// 获取显示文本
    pub fn display_text(&self) -> String {
        match self {
            Lifetime::Infinite => "Infinite".to_string(),
            Lifetime::Duration(duration) => format_duration(*duration),
        }
    }
}

#[derive(Deserialize)]
struct DurationParts {
    secs: u64,
    #[serde(default)]
    nanos: u32,
}

impl<'de> Deserialize<'de> for Lifetime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Secs(u64),
            Fractional(f64),
            Parts(DurationParts),
            Tagged {
                #[serde(rename = "Duration")]
                duration: DurationParts,
            },
            Text(String),
        }

        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(Lifetime::Infinite),
            Some(Repr::Secs(secs)) => Ok(Lifetime::Duration(Duration::from_secs(secs))),
            // 负数、NaN 或超出 Duration 范围的值都是错误
            Some(Repr::Fractional(secs)) => Duration::try_from_secs_f64(secs)
                .map(Lifetime::Duration)
                .map_err(|e| D::Error::custom(format!("invalid lifetime `{}`: {}", secs, e))),
            Some(Repr::Parts(parts)) | Some(Repr::Tagged { duration: parts }) => {
                Ok(Lifetime::Duration(Duration::new(parts.secs, parts.nanos)))
            }
            Some(Repr::Text(text)) if text.trim().eq_ignore_ascii_case("infinite") => {
                Ok(Lifetime::Infinite)
            }
            Some(Repr::Text(text)) => Err(D::Error::custom(format!("invalid lifetime `{}`", text))),
        }
    }
}

/// 上传时间（UTC）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadDate(DateTime<Utc>);

impl UploadDate {
    pub fn from_epoch(secs: i64, nanos: u32) -> Option<Self> {
        DateTime::from_timestamp(secs, nanos).map(UploadDate)
    }

    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// 本地时区的日期 + 时间
    pub fn display_local(&self) -> String {
        self.0
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

impl<'de> Deserialize<'de> for UploadDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Secs(i64),
            Fractional(f64),
            Parts {
                secs_since_epoch: i64,
                #[serde(default)]
                nanos_since_epoch: u32,
            },
        }

        let (secs, nanos) = match Repr::deserialize(deserializer)? {
            Repr::Secs(secs) => (secs, 0),
            Repr::Fractional(value) if value.is_finite() => {
                let whole = value.floor();
                let nanos = ((value - whole) * 1_000_000_000.0) as u32;
                (whole as i64, nanos.min(999_999_999))
            }
            Repr::Fractional(value) => {
                return Err(D::Error::custom(format!("invalid upload date `{}`", value)))
            }
            Repr::Parts {
                secs_since_epoch,
                nanos_since_epoch,
            } => (secs_since_epoch, nanos_since_epoch),
        };

        UploadDate::from_epoch(secs, nanos)
            .ok_or_else(|| D::Error::custom(format!("upload date out of range: {}", secs)))
    }
}

/// 单个文件记录
///
/// 字段只读：标识由服务端分配，密码标记由服务端推导，客户端不做任何修改。
#[derive(Clone, Debug, Deserialize)]
pub struct FileRecord {
    #[serde(alias = "uuid")]
    id: String,
    filename: String,
    #[serde(default, alias = "contentType")]
    content_type: String,
    #[serde(
        default,
        rename = "uploader_uuid",
        alias = "owner_id",
        alias = "ownerId",
        alias = "uploaderUuid"
    )]
    owner_id: Option<String>,
    #[serde(default)]
    visibility: Visibility,
    #[serde(
        default,
        rename = "has_password",
        alias = "passwordProtected",
        alias = "password_protected"
    )]
    password_protected: bool,
    #[serde(default, alias = "downloadCount")]
    download_count: RemainingDownloads,
    #[serde(default)]
    lifetime: Lifetime,
    #[serde(alias = "uploadDate")]
    upload_date: UploadDate,
}

impl FileRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    pub fn password_protected(&self) -> bool {
        self.password_protected
    }

    pub fn download_count(&self) -> RemainingDownloads {
        self.download_count
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    pub fn upload_date(&self) -> UploadDate {
        self.upload_date
    }
}

/// 格式化时长：天/小时/分钟/秒/毫秒，省略为 0 的单位，非 1 时使用复数
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.as_millis();
    let units: [(u128, &str); 5] = [
        (ms / 86_400_000, "day"),
        ((ms / 3_600_000) % 24, "hour"),
        ((ms / 60_000) % 60, "minute"),
        ((ms / 1_000) % 60, "second"),
        (ms % 1_000, "millisecond"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(value, _)| *value != 0)
        .map(|(value, unit)| {
            let suffix = if *value == 1 { "" } else { "s" };
            format!("{} {}{}", value, unit, suffix)
        })
        .collect();

    if parts.is_empty() {
        "0 milliseconds".to_string()
    } else {
        parts.join(", ")
    }
}
