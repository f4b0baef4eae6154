//! Admin upload form: pick one menu file, preview it, send it.

use common::{
    upload::{UploadTarget, accept_attribute, is_accepted_file_name, upload_hint},
    upload_state::UploadFormState,
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdInsertDriveFile, md_file_icons::MdCloudUpload}};

use crate::{
    api::{api_error_from_server_fn, upload_api::upload_menu},
    components::advisory_banner::AdvisoryBanner,
};

#[component]
pub fn UploadForm() -> Element {
    let mut form = use_signal(UploadFormState::default);

    let on_file_change = move |event: Event<FormData>| {
        let ticket = form.write().start_selection();
        let Some(file) = event.files().into_iter().next() else {
            form.write().complete_selection(ticket, None);
            return;
        };
        spawn(async move {
            let name = file.name();
            let target = match file.read_bytes().await {
                Ok(bytes) => Some(UploadTarget::new(name.clone(), file.content_type(), bytes.to_vec())),
                Err(err) => {
                    tracing::error!("could not read {name}: {err}");
                    None
                }
            };
            tracing::info!("selected {:?}", target);
            if !form.write().complete_selection(ticket, target) {
                tracing::info!("dropped stale read of {name}");
            }
        });
    };

    let on_submit = move |event: Event<FormData>| {
        event.prevent_default();
        let target = match form.write().begin() {
            Ok(target) => target,
            Err(err) => {
                tracing::info!("upload not sent: {err}");
                return;
            }
        };
        spawn(async move {
            let file_name = target.file_name.clone();
            let outcome = upload_menu(target).await.map_err(api_error_from_server_fn);
            match &outcome {
                Ok(receipt) => tracing::info!("uploaded {file_name} as {}", receipt.stored_name),
                Err(err) => tracing::error!("upload of {file_name} failed: {err}"),
            }
            form.write().finish(outcome);
        });
    };

    let uploading = form.read().is_uploading();
    let can_submit = form.read().can_submit();
    let advisory = form.read().advisory();

    rsx! {
        form {
            onsubmit: on_submit,
            style: "display: flex; flex-direction: column; gap: 16px;",

            label {
                r#for: "x-menu-file",
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 8px;
                    border: 2px dashed #D1D5DB;
                    border-radius: 8px;
                    padding: 32px;
                    cursor: pointer;
                    background: #F9FAFB;
                ",
                input {
                    id: "x-menu-file",
                    r#type: "file",
                    accept: accept_attribute(),
                    disabled: uploading,
                    style: "display: none;",
                    onchange: on_file_change,
                }
                SelectedFilePreview { form }
            }

            if let Some((kind, text)) = advisory {
                AdvisoryBanner { kind, text: text.to_string() }
            }

            button {
                r#type: "submit",
                class: "x-primary-button",
                disabled: !can_submit,
                if uploading { "Subiendo..." } else { "Subir archivo" }
            }
        }
    }
}

#[component]
fn SelectedFilePreview(form: Signal<UploadFormState>) -> Element {
    let state = form.read();

    let Some(target) = state.selected() else {
        return rsx! {
            span {
                style: "color: #9CA3AF;",
                Icon { icon: MdCloudUpload, style: "width: 48px; height: 48px;" }
            }
            span { style: "color: #4B5563;", "Haz clic para seleccionar un archivo" }
            span { style: "font-size: 13px; color: #9CA3AF;", "{upload_hint()}" }
        };
    };
    let accepted = is_accepted_file_name(&target.file_name);

    rsx! {
        if let Some(preview) = state.preview() {
            img {
                src: "{preview}",
                alt: "Vista previa",
                style: "max-height: 256px; max-width: 100%; border-radius: 6px;",
            }
        } else {
            span {
                style: "color: #6B7280;",
                Icon { icon: MdInsertDriveFile, style: "width: 48px; height: 48px;" }
            }
        }
        span { style: "font-weight: 500; color: #1F2937;", "{target.file_name}" }
        span { style: "font-size: 13px; color: #6B7280;", "{target.size_label()}" }
        if !accepted {
            span {
                style: "font-size: 13px; color: #B45309;",
                "Formato no habitual. Se aceptan PDF, JPG y PNG."
            }
        }
    }
}
