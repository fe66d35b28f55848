// SPDX-License-Identifier: MPL-2.0
//! Routing from a location to a page, and the simple (read-only) pages.
//!
//! The product form and the settings page have their own modules; this one
//! renders the dashboard summary, the inventory list and the placeholder
//! pages.

use crate::domain::inventory::{Catalogue, Product};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::sidebar::is_active;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Location of the product creation form.
pub const ADD_PRODUCT_PATH: &str = "/inventory/new";

/// Every page reachable from the sidebar or in-page links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Inventory,
    AddProduct,
    Reports,
    Suppliers,
    Sales,
    ManageStore,
    Employees,
    Settings,
    Login,
    NotFound,
}

/// Section pages, matched with the same rule as the sidebar links.
const SECTIONS: [(&str, Page); 9] = [
    ("/", Page::Dashboard),
    ("/inventory", Page::Inventory),
    ("/reports", Page::Reports),
    ("/suppliers", Page::Suppliers),
    ("/sales", Page::Sales),
    ("/manage-store", Page::ManageStore),
    ("/employees", Page::Employees),
    ("/settings", Page::Settings),
    ("/login", Page::Login),
];

impl Page {
    /// Resolves a location to the page that renders it.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        if location == ADD_PRODUCT_PATH {
            return Page::AddProduct;
        }
        SECTIONS
            .iter()
            .find(|(path, _)| is_active(path, location))
            .map_or(Page::NotFound, |(_, page)| *page)
    }

    /// i18n key of the page heading (also used in the window title).
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Page::Dashboard => "nav-dashboard",
            Page::Inventory => "nav-inventory",
            Page::AddProduct => "product-form-title",
            Page::Reports => "nav-reports",
            Page::Suppliers => "nav-suppliers",
            Page::Sales => "nav-sales",
            Page::ManageStore => "nav-manage-store",
            Page::Employees => "nav-employees",
            Page::Settings => "nav-settings",
            Page::Login => "login-title",
            Page::NotFound => "not-found-title",
        }
    }
}

/// Messages emitted by the simple pages.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(&'static str),
}

/// Contextual data needed to render a page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalogue: &'a Catalogue,
    pub location: &'a str,
}

/// Renders `page`. The form and settings pages are rendered elsewhere and
/// fall back to a plain heading here.
pub fn view<'a>(page: Page, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let heading = Text::new(i18n.tr(page.title_key())).size(typography::TITLE_LG);

    let body: Element<'a, Message> = match page {
        Page::Dashboard => dashboard(&ctx),
        Page::Inventory => inventory(&ctx),
        Page::Login => with_home_link(i18n, i18n.tr("login-signed-out")),
        Page::NotFound => with_home_link(
            i18n,
            i18n.tr_with_args("not-found-message", &[("path", ctx.location)]),
        ),
        Page::Reports
        | Page::Suppliers
        | Page::Sales
        | Page::ManageStore
        | Page::Employees
        | Page::AddProduct
        | Page::Settings => Text::new(i18n.tr("page-coming-soon"))
            .style(styles::text::muted)
            .into(),
    };

    Column::new()
        .spacing(spacing::LG)
        .push(heading)
        .push(body)
        .into()
}

fn dashboard<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let summary = Summary::of(ctx.catalogue);
    let i18n = ctx.i18n;
    let products = summary.products.to_string();
    let units = summary.units.to_string();
    let value = format!("{:.2}", summary.stock_value);

    Row::new()
        .spacing(spacing::MD)
        .push(stat_card(i18n.tr("dashboard-products"), products))
        .push(stat_card(i18n.tr("dashboard-units"), units))
        .push(stat_card(i18n.tr("dashboard-stock-value"), value))
        .into()
}

fn stat_card<'a>(label: String, value: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::CAPTION).style(styles::text::muted))
        .push(Text::new(value).size(typography::TITLE_SM));

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn inventory<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let add = button(Text::new(i18n.tr("inventory-add-product")))
        .on_press(Message::Navigate(ADD_PRODUCT_PATH))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let toolbar = Row::new()
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(add);

    let list: Element<'a, Message> = if ctx.catalogue.is_empty() {
        Text::new(i18n.tr("inventory-empty"))
            .style(styles::text::muted)
            .into()
    } else {
        let header = product_row(
            [
                i18n.tr("inventory-column-name"),
                i18n.tr("inventory-column-sku"),
                i18n.tr("inventory-column-category"),
                i18n.tr("inventory-column-stock"),
                i18n.tr("inventory-column-price"),
            ],
            true,
        );
        let rows = ctx
            .catalogue
            .iter()
            .fold(Column::new().spacing(spacing::XS).push(header), |col, p| {
                col.push(product_row(product_cells(p), false))
            });
        scrollable(rows).height(Length::Fill).into()
    };

    let card = Container::new(list)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card);

    Column::new()
        .spacing(spacing::MD)
        .push(toolbar)
        .push(card)
        .into()
}

fn product_cells(product: &Product) -> [String; 5] {
    [
        product.name.clone(),
        product.sku.clone(),
        product.category.clone(),
        format!("{} {}", product.stock, product.unit),
        format!("{:.2}", product.price),
    ]
}

fn product_row<'a>(cells: [String; 5], header: bool) -> Element<'a, Message> {
    cells
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, cell| {
            let text = Text::new(cell).size(typography::BODY).width(Length::FillPortion(1));
            row.push(if header {
                text.style(styles::text::muted)
            } else {
                text
            })
        })
        .into()
}

fn with_home_link<'a>(i18n: &I18n, message: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(message))
        .push(
            button(Text::new(i18n.tr("back-to-dashboard")))
                .on_press(Message::Navigate("/"))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .into()
}

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub products: usize,
    pub units: u64,
    pub stock_value: f64,
}

impl Summary {
    #[must_use]
    pub fn of(catalogue: &Catalogue) -> Self {
        catalogue.iter().fold(
            Self {
                products: 0,
                units: 0,
                stock_value: 0.0,
            },
            |acc, p| Self {
                products: acc.products + 1,
                units: acc.units + u64::from(p.stock),
                stock_value: acc.stock_value + p.cost * f64::from(p.stock),
            },
        )
    }
}
