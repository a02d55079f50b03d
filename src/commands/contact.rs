//! Validate a contact message and print the backend payload

use anyhow::Result;

use crate::contact::ContactForm;
use crate::Site;

pub fn run(site: &Site, form: ContactForm) -> Result<()> {
    let payload = form.into_payload(&site.config.contact)?;
    tracing::info!("Contact payload ready for {}", payload.email);
    println!("{}", payload.to_json()?);
    Ok(())
}
