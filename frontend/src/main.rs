use std::sync::Arc;

use shared::{fixtures, BillingConfig, Family, PaymentStatus};
use tracing_subscriber::layer::SubscriberExt;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::BillingPage;
use services::logging::{ConsoleLayer, Logger};

/// Records backing the billing screen, loaded once at startup
#[derive(Clone, PartialEq)]
struct Directory {
    families: Arc<[Family]>,
    payment_status: PaymentStatus,
}

fn load_directory() -> shared::Result<Directory> {
    let families = fixtures::mock_families()?;
    let payment_status = fixtures::mock_payment_status()?;
    Logger::info_with_component("app", &format!("Loaded {} families", families.len()));
    Ok(Directory {
        families: families.into(),
        payment_status,
    })
}

#[function_component(App)]
fn app() -> Html {
    let directory = use_memo((), |_| load_directory().map_err(|e| e.to_string()));
    let config = use_memo((), |_| BillingConfig::default());

    match &*directory {
        Ok(directory) => html! {
            <BillingPage
                families={directory.families.clone()}
                payment_status={directory.payment_status.clone()}
                config={(*config).clone()}
            />
        },
        Err(message) => {
            Logger::error_with_component("app", message);
            html! {
                <div class="billing-page">
                    <div class="search-error">{format!("Unable to load family records: {}", message)}</div>
                </div>
            }
        }
    }
}

fn main() {
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new());
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        Logger::warn_with_component("app", &format!("Tracing events will not reach the console: {}", e));
    }

    yew::Renderer::<App>::new().render();
}
