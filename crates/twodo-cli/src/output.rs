use serde::Serialize;
use twodo_core::LogicError;
use twodo_domain::CommandResult;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> CliResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            api_version: env!("CARGO_PKG_VERSION"),
            data: Some(data),
            error: None,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            success: false,
            api_version: env!("CARGO_PKG_VERSION"),
            data: None,
            error: Some(message),
        }
    }
}

/// How results reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }

    pub fn render_success(self, result: &CommandResult) -> anyhow::Result<String> {
        match self {
            Self::Text => Ok(result.feedback().to_string()),
            Self::Json => Ok(serde_json::to_string(&CliResponse::success(result))?),
        }
    }

    pub fn render_error(self, error: &LogicError) -> anyhow::Result<String> {
        match self {
            Self::Text => Ok(error.to_string()),
            Self::Json => Ok(serde_json::to_string(&CliResponse::<()>::failure(
                error.to_string(),
            ))?),
        }
    }
}

pub fn output_success(format: OutputFormat, result: &CommandResult) -> anyhow::Result<()> {
    println!("{}", format.render_success(result)?);
    Ok(())
}

/// Errors go to stderr so scripts can keep feedback and failures apart.
pub fn output_error(format: OutputFormat, error: &LogicError) -> anyhow::Result<()> {
    eprintln!("{}", format.render_error(error)?);
    Ok(())
}
