//! 审核结论
//!
//! 评分接口返回的 JSON 在这里被显式校验并转换为 `ModerationVerdict`

use serde::Serialize;
use serde_json::Value;

/// 分类标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// 有毒内容
    Toxic,
    /// 无毒内容
    NonToxic,
}

impl Label {
    /// 解析服务端返回的标签，支持字符串和整数两种形式
    fn decode(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => match s.as_str() {
                "LABEL_1" | "toxic" | "1" => Some(Label::Toxic),
                "LABEL_0" | "not_toxic" | "0" => Some(Label::NonToxic),
                _ => None,
            },
            Value::Number(n) => match n.as_u64() {
                Some(1) => Some(Label::Toxic),
                Some(0) => Some(Label::NonToxic),
                _ => None,
            },
            _ => None,
        }
    }

    /// 是否判定为有毒
    pub fn is_toxic(self) -> bool {
        self == Label::Toxic
    }
}

/// 审核结论：要么是标签 + 置信度，要么是服务端报告的错误
#[derive(Debug, Clone, PartialEq)]
pub enum ModerationVerdict {
    Scored {
        label: Label,
        /// 服务端原始标签文本，用于回显
        raw_label: String,
        /// 置信度，范围 [0, 1]
        score: f64,
    },
    Error {
        message: String,
    },
}

/// `/predict` 请求体
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

impl ModerationVerdict {
    pub fn scored(label: Label, raw_label: impl Into<String>, score: f64) -> Self {
        ModerationVerdict::Scored {
            label,
            raw_label: raw_label.into(),
            score,
        }
    }

    /// 从响应体解析
    ///
    /// # 返回
    /// 结构不合法时返回描述原因的字符串
    pub fn from_json_slice(body: &[u8]) -> Result<Self, String> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| format!("ответ не является JSON: {}", e))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, String> {
        let object = value
            .as_object()
            .ok_or_else(|| "ожидался JSON-объект".to_string())?;

        let error = object.get("error");
        let label = object.get("label");

        match (error, label) {
            (Some(_), Some(_)) => Err("ответ содержит одновременно error и label".to_string()),
            (Some(Value::String(message)), None) => Ok(ModerationVerdict::Error {
                message: message.clone(),
            }),
            (Some(_), None) => Err("поле error должно быть строкой".to_string()),
            (None, None) => Err("в ответе нет ни label, ни error".to_string()),
            (None, Some(label)) => {
                let score = object
                    .get("score")
                    .and_then(Value::as_f64)
                    .ok_or_else(|| "поле score отсутствует или не является числом".to_string())?;

                // 服务端在模型没有产出结果时返回 {"label": "error", "score": 0.0}
                if label.as_str() == Some("error") {
                    return Ok(ModerationVerdict::Error {
                        message: "Модель не вернула результат".to_string(),
                    });
                }

                if !(0.0..=1.0).contains(&score) {
                    return Err(format!("score {} вне диапазона [0, 1]", score));
                }

                let decoded = Label::decode(label)
                    .ok_or_else(|| format!("неизвестная метка: {}", label))?;
                let raw_label = match label {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };

                Ok(ModerationVerdict::scored(decoded, raw_label, score))
            }
        }
    }
}
