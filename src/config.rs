use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state-machine traces when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const COMPANY_NAME: &str = "EVELYN SAC";
pub const SALES_PHONE_DISPLAY: &str = "+51 999 888 777";
pub const SALES_PHONE_TEL: &str = "tel:+51999888777";
pub const OFFICE_PHONE_DISPLAY: &str = "(01) 234-5678";
pub const OFFICE_PHONE_TEL: &str = "tel:012345678";
pub const SALES_EMAIL: &str = "ventas@evelynsac.com";
pub const CONTACT_EMAIL: &str = "contacto@evelynsac.com";
pub const OFFICE_ADDRESS: &str = "Av. Tecnología 123, Lima, Perú";
pub const OFFICE_HOURS: &str = "Lun - Sab: 9am - 6pm";

/// International number without `+`, as `wa.me` expects it.
pub const WHATSAPP_NUMBER: &str = "51999888777";

// Timings, all in milliseconds.
pub const SUBMIT_LATENCY_MS: u32 = 2_000;
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const HERO_WORD_INTERVAL_MS: u32 = 2_000;
pub const HASH_SCROLL_DELAY_MS: u32 = 100;
pub const CONTACT_CONFIRMATION_MS: u32 = 3_000;

pub fn whatsapp_link(message: &str) -> String {
    if message.is_empty() {
        return format!("https://wa.me/{}", WHATSAPP_NUMBER);
    }
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_without_message_is_bare() {
        assert_eq!(whatsapp_link(""), "https://wa.me/51999888777");
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link("Hola, quiero info"),
            "https://wa.me/51999888777?text=Hola%2C%20quiero%20info"
        );
    }
}
