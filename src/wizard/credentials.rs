use crate::{
    lib::errors::InputError,
    telegram::ApiCredentials,
    wizard::prompt::{Prompt, Prompter},
};

/// Use the flag-supplied pair when present; otherwise ask for both fields.
///
/// Both answers are read before either is validated.
pub fn acquire_credentials(
    preset: Option<ApiCredentials>,
    prompter: &mut dyn Prompter,
) -> Result<ApiCredentials, InputError> {
    if let Some(credentials) = preset {
        return Ok(credentials);
    }

    let api_id = prompter.ask(&Prompt::ApiId)?;
    let api_hash = prompter.ask(&Prompt::ApiHash)?;
    validate_credentials(&api_id, &api_hash)
}

/// Validate trimmed prompt answers.
pub fn validate_credentials(api_id: &str, api_hash: &str) -> Result<ApiCredentials, InputError> {
    let api_id = api_id.trim();
    let api_hash = api_hash.trim();
    if api_id.is_empty() || api_hash.is_empty() {
        return Err(InputError::MissingCredentials);
    }

    let parsed = api_id.parse::<i32>().map_err(|_| InputError::InvalidApiId {
        value: api_id.to_string(),
    })?;

    Ok(ApiCredentials {
        api_id: parsed,
        api_hash: api_hash.to_string(),
    })
}
