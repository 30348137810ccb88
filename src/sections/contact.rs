use crate::context::MountContext;
use crate::dom;
use crate::motion::{self, ButtonHandle};
use folio_core::content::SOCIAL_LINKS;
use folio_core::{
    AnimatedButton, ButtonSize, ButtonVariant, ContactController, ContactField, ContactFormState,
    Disposer, FolioError, SectionId, SectionReveal, SubmitPhase, TextMode, TextOptions,
    TEXT_VIEW_THRESHOLD,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn button_label(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Idle => "Send Message",
        SubmitPhase::Submitting => "Sending...",
        SubmitPhase::Submitted => "Message Sent!",
    }
}

/// Input or textarea for one field; both expose `value` the same way.
enum FieldInput {
    Line(web::HtmlInputElement),
    Area(web::HtmlTextAreaElement),
}

impl FieldInput {
    fn value(&self) -> String {
        match self {
            FieldInput::Line(i) => i.value(),
            FieldInput::Area(t) => t.value(),
        }
    }

    fn set_value(&self, v: &str) {
        match self {
            FieldInput::Line(i) => i.set_value(v),
            FieldInput::Area(t) => t.set_value(v),
        }
    }

    fn set_disabled(&self, d: bool) {
        match self {
            FieldInput::Line(i) => i.set_disabled(d),
            FieldInput::Area(t) => t.set_disabled(d),
        }
    }

    fn target(&self) -> &web::EventTarget {
        match self {
            FieldInput::Line(i) => i.as_ref(),
            FieldInput::Area(t) => t.as_ref(),
        }
    }
}

fn field_input(
    doc: &web::Document,
    form: &web::HtmlElement,
    field: ContactField,
) -> anyhow::Result<FieldInput> {
    let (label, tag, kind, placeholder) = match field {
        ContactField::Name => ("Name", "input", "text", "Your name"),
        ContactField::Email => ("Email", "input", "email", "your@email.com"),
        ContactField::Message => ("Message", "textarea", "", "Tell me about your project..."),
    };
    let id = format!("contact-{}", field.name());
    let group = dom::el(doc, "div", "form-group")?;
    let l = dom::text_el(doc, "label", "form-label", label)?;
    _ = l.set_attribute("for", &id);
    dom::append(&group, &l)?;

    let el = dom::el(doc, tag, "form-input")?;
    el.set_id(&id);
    _ = el.set_attribute("name", field.name());
    _ = el.set_attribute("placeholder", placeholder);
    _ = el.set_attribute("required", "");
    if !kind.is_empty() {
        _ = el.set_attribute("type", kind);
    }
    if field == ContactField::Message {
        _ = el.set_attribute("rows", "5");
    }
    dom::append(&group, &el)?;
    dom::append(form, &group)?;

    let input = if tag == "textarea" {
        FieldInput::Area(el.dyn_into().map_err(|e| anyhow::anyhow!("{:?}", e))?)
    } else {
        FieldInput::Line(el.dyn_into().map_err(|e| anyhow::anyhow!("{:?}", e))?)
    };
    Ok(input)
}

fn render_state(
    s: &ContactFormState,
    inputs: &[(ContactField, Rc<FieldInput>)],
    button: &ButtonHandle,
    success: &web::HtmlElement,
) {
    let phase = s.phase();
    button.set_label(button_label(phase));
    button.set_disabled(phase != SubmitPhase::Idle);
    for (field, input) in inputs {
        input.set_disabled(phase == SubmitPhase::Submitting);
        if input.value() != s.field(*field) {
            input.set_value(s.field(*field));
        }
    }
    _ = success
        .class_list()
        .toggle_with_force("visible", phase == SubmitPhase::Submitted);
}

pub fn mount(ctx: &mut MountContext, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = super::section(ctx, main, SectionId::Contact.id(), SectionReveal::Fade)?;
    let doc = ctx.document.clone();

    let heading = motion::animated_text(
        ctx,
        "h2",
        "section-title",
        "Let's Work Together",
        TextMode::SlideUp,
        TextOptions::default(),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&section, &heading)?;

    let layout = dom::el(&doc, "div", "contact-layout")?;
    dom::append(&section, &layout)?;

    let socials = dom::el(&doc, "ul", "contact-socials")?;
    dom::append(&layout, &socials)?;
    let strength = ctx.config.magnetic_strength;
    for link in SOCIAL_LINKS {
        let li = dom::el(&doc, "li", "")?;
        let a = dom::link(&doc, link.href, "social-link", "")?;
        _ = a.set_attribute("aria-label", link.name);
        if link.href.starts_with("http") {
            _ = a.set_attribute("target", "_blank");
            _ = a.set_attribute("rel", "noopener noreferrer");
        }
        let icon = dom::text_el(&doc, "span", "social-icon", link.icon)?;
        dom::mark_decorative(&icon);
        dom::append(&a, &icon)?;
        dom::append(&a, &dom::text_el(&doc, "span", "social-label", link.label)?)?;
        dom::append(&li, &a)?;
        dom::append(&socials, &li)?;
        motion::attach_magnetic(ctx, &a, strength);
    }

    let form_el = dom::el(&doc, "form", "contact-form")?;
    _ = form_el.set_attribute("novalidate", "");
    dom::append(&layout, &form_el)?;
    let mut inputs = Vec::with_capacity(ContactField::ALL.len());
    for field in ContactField::ALL {
        inputs.push((field, Rc::new(field_input(&doc, &form_el, field)?)));
    }
    let (submit, button) = motion::animated_button(
        ctx,
        AnimatedButton::new(ButtonVariant::Primary, ButtonSize::Lg).with_magnetic_strength(strength),
        button_label(SubmitPhase::Idle),
        None,
    )?;
    _ = submit.set_attribute("type", "submit");
    dom::append(&form_el, &submit)?;
    let success = dom::text_el(
        &doc,
        "p",
        "form-success",
        "Thanks! Your message has been sent. I'll get back to you soon.",
    )?;
    _ = success.set_attribute("role", "status");
    _ = success.set_attribute("aria-live", "polite");
    dom::append(&form_el, &success)?;

    let controller = Rc::new(ContactController::simulated(
        ctx.timer,
        ctx.config.contact_timing(),
    ));
    {
        let inputs = inputs.clone();
        let button = button.clone();
        let success = success.clone();
        controller.on_change(move |s| render_state(s, &inputs, &button, &success));
    }

    for (field, input) in &inputs {
        let c = controller.clone();
        let field = *field;
        let i = input.clone();
        ctx.keep(dom::listen(input.target(), "input", move |_: web::Event| {
            c.set_field(field, i.value());
        }));
    }

    let form: web::HtmlFormElement = form_el
        .clone()
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let c = controller.clone();
    let target: &web::EventTarget = form_el.as_ref();
    ctx.keep(dom::listen(target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        match c.submit() {
            Ok(()) => {}
            Err(FolioError::IncompleteForm(field)) => {
                log::debug!("[contact] missing {}", field);
                _ = form.report_validity();
            }
            Err(e) => log::debug!("[contact] {}", e),
        }
    }));

    ctx.keep(Disposer::new(move || controller.teardown()));
    Ok(())
}
