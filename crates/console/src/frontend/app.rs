//! Leptos application with routing.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use devportal_catalog::{PLACEHOLDER, ProductRow, endpoint_host, status_label, visibility_label};
use devportal_store::{Client, IdentityClient, ProductStore, StoreConfig};

use crate::delete::PendingDelete;
use crate::loader::{CancelToken, fetch_rows};
use crate::state::{DashboardState, Transition};

/// Store configuration baked in at build time for the WASM bundle.
fn store_config() -> StoreConfig {
    StoreConfig {
        base_url: option_env!("DEVPORTAL_STORE_URL")
            .unwrap_or_default()
            .to_string(),
        anon_key: option_env!("DEVPORTAL_STORE_ANON_KEY")
            .unwrap_or_default()
            .to_string(),
        token_url: option_env!("DEVPORTAL_TOKEN_URL")
            .unwrap_or_default()
            .to_string(),
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=ProductsPage/>
            </Routes>
        </Router>
    }
}

/// API-product listings page.
#[component]
fn ProductsPage() -> impl IntoView {
    let state = create_rw_signal(DashboardState::new());
    let client = create_rw_signal(None::<Rc<Client>>);

    // One load per page entry; teardown only prevents the result from being
    // applied, it does not abort the request.
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        spawn_local(async move {
            let config = store_config();
            let identity = IdentityClient::new(config.token_url.clone());
            let connected = Client::connect(config, &identity).await;
            let rows = fetch_rows(&connected).await;
            if cancel.is_cancelled() {
                return;
            }
            client.set(Some(Rc::new(connected)));
            state.update(|s| s.apply(Transition::SetRows(rows)));
        });
    }
    on_cleanup(move || cancel.cancel());

    let delete_row = move |id: String, name: Option<String>| {
        let Some(store) = client.get_untracked() else {
            return;
        };
        let label = name.unwrap_or_else(|| id.clone());
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete \"{label}\"? This cannot be undone."))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let mut started = None;
        state.update(|s| started = PendingDelete::begin(s, &id));
        let Some(pending) = started else {
            return;
        };
        spawn_local(async move {
            match store.delete_product(pending.id()).await {
                Ok(()) => {
                    state.update(|s| pending.commit(s));
                }
                Err(err) => {
                    state.update(|s| pending.rollback(s));
                    if let Some(w) = web_sys::window() {
                        let _ =
                            w.alert_with_message(&format!("Failed to delete \"{label}\": {err}"));
                    }
                }
            }
        });
    };

    let visible = move || {
        state.with(|s| {
            s.visible_rows()
                .into_iter()
                .cloned()
                .collect::<Vec<ProductRow>>()
        })
    };

    view! {
        <div class="console">
            <header>
                <h1>"API Products"</h1>
                <A href="/products/new">"New product"</A>
            </header>

            <main>
                <input
                    type="search"
                    placeholder="Search by name, category, status..."
                    prop:value=move || state.with(|s| s.query().to_string())
                    on:input=move |ev| {
                        state.update(|s| s.apply(Transition::SetQuery(event_target_value(&ev))))
                    }
                />

                {move || {
                    if state.with(|s| s.is_loading()) {
                        return view! { <p class="loading">"Loading products..."</p> }.into_view();
                    }
                    let rows = visible();
                    if rows.is_empty() {
                        return view! { <p class="empty">"No API products found."</p> }.into_view();
                    }
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Category"</th>
                                    <th>"Status"</th>
                                    <th>"Visibility"</th>
                                    <th>"Endpoint"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.iter().map(|row| product_row(state, delete_row, row)).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }}
            </main>
        </div>
    }
}

/// One table row for a product listing.
fn product_row(
    state: RwSignal<DashboardState>,
    delete_row: impl Fn(String, Option<String>) + Copy + 'static,
    row: &ProductRow,
) -> impl IntoView {
    let id = row.id.clone();
    let name = row.name.clone();
    let edit_href = format!("/products/{}/edit", row.id);
    let thumbnail = row.thumbnail_url.clone();
    let host = row
        .service_endpoint_url
        .as_deref()
        .and_then(endpoint_host)
        .unwrap_or(PLACEHOLDER)
        .to_string();

    let is_deleting = {
        let id = id.clone();
        move || state.with(|s| s.is_deleting(&id))
    };
    let button_label = {
        let is_deleting = is_deleting.clone();
        move || if is_deleting() { "Deleting..." } else { "Delete" }
    };

    view! {
        <tr>
            <td class="name">
                {thumbnail.map(|src| view! { <img src=src width="32" height="32"/> })}
                {name.clone().unwrap_or_else(|| PLACEHOLDER.to_string())}
            </td>
            <td>{row.category.clone().unwrap_or_else(|| PLACEHOLDER.to_string())}</td>
            <td>{status_label(row.status.as_deref())}</td>
            <td>{visibility_label(row.visibility.as_deref())}</td>
            <td>{host}</td>
            <td>
                <A href=edit_href>"Edit"</A>
                <button
                    class="danger"
                    disabled=is_deleting
                    on:click=move |_| delete_row(id.clone(), name.clone())
                >
                    {button_label}
                </button>
            </td>
        </tr>
    }
}
