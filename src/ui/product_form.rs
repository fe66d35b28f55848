// SPDX-License-Identifier: MPL-2.0
//! "New product" form.
//!
//! Holds the raw draft and its per-field errors. Submitting validates the
//! draft; adding the product to the catalogue and reporting the outcome is
//! left to the application.

use crate::domain::inventory::{Field, FieldErrors, Product, ProductDraft, DEFAULT_CATEGORIES};
use crate::error::ProductError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Text fields in display order, with their label keys.
const TEXT_FIELDS: [(Field, &str); 7] = [
    (Field::Name, "product-field-name"),
    (Field::ProductId, "product-field-product-id"),
    (Field::BuyingPrice, "product-field-buying-price"),
    (Field::Quantity, "product-field-quantity"),
    (Field::Unit, "product-field-unit"),
    (Field::ExpiryDate, "product-field-expiry-date"),
    (Field::SupplierDetails, "product-field-supplier-details"),
];

#[derive(Debug, Clone)]
pub struct State {
    draft: ProductDraft,
    errors: FieldErrors,
    categories: Vec<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect())
    }
}

impl State {
    #[must_use]
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            draft: ProductDraft::default(),
            errors: FieldErrors::default(),
            categories,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Clears the draft and every error.
    pub fn reset(&mut self) {
        self.draft = ProductDraft::default();
        self.errors = FieldErrors::default();
    }

    /// Marks `field` as invalid without touching the draft.
    pub fn flag(&mut self, field: Field) {
        self.errors.insert(field);
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(Field, String),
    CategorySelected(String),
    Submit,
    Discard,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The draft is valid. The form keeps its content until reset.
    Submitted(Product),
    /// The draft has invalid fields; they are now shown on the form.
    Rejected(ProductError),
    /// The user abandoned the form; it has been reset.
    Discarded,
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Edit(field, value) => {
            state.draft.set(field, value);
            state.errors.clear(field);
            Event::None
        }
        Message::CategorySelected(category) => {
            state.draft.set(Field::Category, category);
            state.errors.clear(Field::Category);
            Event::None
        }
        Message::Submit => match state.draft.validate() {
            Ok(product) => {
                state.errors = FieldErrors::default();
                Event::Submitted(product)
            }
            Err(errors) => {
                let fields = errors.len();
                state.errors = errors;
                Event::Rejected(ProductError::Validation { fields })
            }
        },
        Message::Discard => {
            state.reset();
            Event::Discarded
        }
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let mut fields = Column::new().spacing(spacing::MD);
    for (index, (field, label_key)) in TEXT_FIELDS.iter().enumerate() {
        // category picker goes right after the product id
        if index == 2 {
            fields = fields.push(category_row(i18n, state));
        }
        fields = fields.push(text_row(i18n, state, *field, label_key));
    }

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("product-form-discard")))
                .on_press(Message::Discard)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("product-form-submit")))
                .on_press(Message::Submit)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let body = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("product-form-title")).size(typography::TITLE_SM))
        .push(fields)
        .push(actions);

    Container::new(body)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn labeled<'a>(
    i18n: &I18n,
    label_key: &str,
    input: Element<'a, Message>,
    error_key: Option<&str>,
) -> Element<'a, Message> {
    let mut input_column = Column::new().spacing(spacing::XXS).push(input);
    if let Some(key) = error_key {
        input_column = input_column.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .style(styles::text::error),
        );
    }

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(label_key))
                .size(typography::BODY)
                .width(Length::Fixed(sizing::FORM_LABEL_WIDTH)),
        )
        .push(input_column.width(Length::Fill))
        .into()
}

fn text_row<'a>(
    i18n: &I18n,
    state: &'a State,
    field: Field,
    label_key: &str,
) -> Element<'a, Message> {
    let placeholder = i18n.tr(&format!("{label_key}-placeholder"));
    let input = text_input(&placeholder, state.draft.get(field))
        .on_input(move |value| Message::Edit(field, value))
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY);

    labeled(i18n, label_key, input.into(), state.errors.get(field))
}

fn category_row<'a>(i18n: &I18n, state: &'a State) -> Element<'a, Message> {
    let picker = pick_list(
        state.categories.as_slice(),
        state.draft.category.clone(),
        Message::CategorySelected,
    )
    .placeholder(i18n.tr("product-field-category-placeholder"))
    .padding(spacing::XS)
    .text_size(typography::BODY)
    .width(Length::Fill);

    labeled(
        i18n,
        "product-field-category",
        picker.into(),
        state.errors.get(Field::Category),
    )
}
