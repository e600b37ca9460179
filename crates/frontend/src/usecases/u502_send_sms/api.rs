use crate::shared::network::{api, ApiError, NetworkManager};
use contracts::usecases::u501_send_campaign::{SendResult, SendTemplateMessageRequest};
use contracts::usecases::u502_send_sms::SmsRequest;

pub async fn send_sms(req: &SmsRequest) -> Result<(), ApiError> {
    NetworkManager::new(api::SMS_SEND).send(req).await?;
    Ok(())
}

/// Template message to one number
pub async fn send_template_message(req: &SendTemplateMessageRequest) -> SendResult {
    match NetworkManager::new(api::SEND_TEMPLATE_MESSAGE).send(req).await {
        Ok(body) => SendResult::from_body(&body),
        Err(e) => SendResult::failed(e.message_or("Failed to send the message")),
    }
}
