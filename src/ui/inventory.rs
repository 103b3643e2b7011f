// SPDX-License-Identifier: MPL-2.0
//! Storage inventory screen: the item table and its add/edit dialog.

use crate::domain::inventory::{parse_quantity, Category, Inventory, InventoryItem};
use crate::i18n::fluent::I18n;
use crate::ui::components::status_panel::{StatusPanel, Tone};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, mouse_area, opaque, pick_list, scrollable, text_input, Column, Container, Row, Space,
    Stack, Text,
};
use iced::{alignment, Element, Length};

/// The add/edit dialog works on a copy; nothing reaches the table until save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    draft: InventoryItem,
    quantity_input: String,
    is_new: bool,
}

impl Editor {
    fn new(draft: InventoryItem, is_new: bool) -> Self {
        let quantity_input = if is_new {
            String::new()
        } else {
            draft.quantity.to_string()
        };
        Self {
            draft,
            quantity_input,
            is_new,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &InventoryItem {
        &self.draft
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

#[derive(Debug, Clone)]
pub struct State {
    inventory: Inventory,
    editor: Option<Editor>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Inventory::seeded())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Add,
    Edit(u32),
    Delete(u32),
    NameChanged(String),
    CategorySelected(Category),
    QuantityChanged(String),
    LocationChanged(String),
    Save,
    Cancel,
}

impl State {
    #[must_use]
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            editor: None,
        }
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[must_use]
    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Add => {
                let draft = InventoryItem::blank(self.inventory.next_id());
                self.editor = Some(Editor::new(draft, true));
            }
            Message::Edit(id) => {
                if let Some(item) = self.inventory.get(id) {
                    self.editor = Some(Editor::new(item.clone(), false));
                }
            }
            Message::Delete(id) => {
                self.inventory.delete(id);
                if self.editor.as_ref().is_some_and(|e| e.draft.id == id) {
                    self.editor = None;
                }
            }
            Message::NameChanged(name) => {
                if let Some(editor) = &mut self.editor {
                    editor.draft.name = name;
                }
            }
            Message::CategorySelected(category) => {
                if let Some(editor) = &mut self.editor {
                    editor.draft.category = Some(category);
                }
            }
            Message::QuantityChanged(input) => {
                if let Some(editor) = &mut self.editor {
                    editor.draft.quantity = parse_quantity(&input);
                    editor.quantity_input = input;
                }
            }
            Message::LocationChanged(location) => {
                if let Some(editor) = &mut self.editor {
                    editor.draft.location = location;
                }
            }
            Message::Save => {
                if let Some(editor) = self.editor.take() {
                    let id = editor.draft.id;
                    if editor.is_new {
                        self.inventory.append(editor.draft);
                    } else if !self.inventory.replace(editor.draft) {
                        log::debug!("inventory row {id} vanished before save");
                    }
                }
            }
            Message::Cancel => {
                self.editor = None;
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("inventory-title")).size(typography::TITLE_LG))
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(i18n.tr("inventory-add")))
                    .on_press(Message::Add)
                    .style(styles::button::primary),
            );

        let body: Element<'a, Message> = if self.inventory.is_empty() {
            StatusPanel::new(Tone::Neutral)
                .title(i18n.tr("inventory-empty"))
                .view()
        } else {
            scrollable(self.table(i18n)).height(Length::Fill).into()
        };

        let base = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill);

        match &self.editor {
            Some(editor) => Stack::new()
                .push(base)
                .push(editor_dialog(editor, i18n))
                .into(),
            None => base.into(),
        }
    }

    fn table<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = table_row(
            [
                i18n.tr("inventory-column-name"),
                i18n.tr("inventory-column-category"),
                i18n.tr("inventory-column-quantity"),
                i18n.tr("inventory-column-location"),
            ],
            Space::new().width(Length::Fill).into(),
        );

        self.inventory
            .items()
            .iter()
            .fold(
                Column::new().spacing(spacing::XS).push(heading),
                |column, item| {
                    let actions = Row::new()
                        .spacing(spacing::XXS)
                        .push(
                            button(Text::new(i18n.tr("inventory-edit")).size(typography::BODY_SM))
                                .on_press(Message::Edit(item.id))
                                .style(styles::button::unselected),
                        )
                        .push(
                            button(Text::new(i18n.tr("inventory-delete")).size(typography::BODY_SM))
                                .on_press(Message::Delete(item.id))
                                .style(styles::button::danger),
                        );
                    column.push(table_row(
                        [
                            item.name.clone(),
                            item.category.map(|c| c.to_string()).unwrap_or_default(),
                            item.quantity.to_string(),
                            item.location.clone(),
                        ],
                        actions.into(),
                    ))
                },
            )
            .into()
    }
}

fn table_row<'a>(cells: [String; 4], trailing: Element<'a, Message>) -> Element<'a, Message> {
    let row = cells.into_iter().fold(
        Row::new().spacing(spacing::SM).align_y(alignment::Vertical::Center),
        |row, cell| {
            row.push(
                Container::new(Text::new(cell).size(typography::BODY))
                    .width(Length::FillPortion(2)),
            )
        },
    );
    Container::new(row.push(Container::new(trailing).width(Length::FillPortion(2))))
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::panel)
        .into()
}

fn editor_dialog<'a>(editor: &'a Editor, i18n: &'a I18n) -> Element<'a, Message> {
    let title = if editor.is_new {
        i18n.tr("inventory-dialog-add")
    } else {
        i18n.tr("inventory-dialog-edit")
    };

    let field = |label: String, control: Element<'a, Message>| {
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(label).size(typography::BODY_SM))
            .push(control)
    };

    let form = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(field(
            i18n.tr("inventory-column-name"),
            text_input("", &editor.draft.name)
                .on_input(Message::NameChanged)
                .into(),
        ))
        .push(field(
            i18n.tr("inventory-column-category"),
            pick_list(
                Category::ALL,
                editor.draft.category,
                Message::CategorySelected,
            )
            .width(Length::Fill)
            .into(),
        ))
        .push(field(
            i18n.tr("inventory-column-quantity"),
            text_input("0", &editor.quantity_input)
                .on_input(Message::QuantityChanged)
                .into(),
        ))
        .push(field(
            i18n.tr("inventory-column-location"),
            text_input("", &editor.draft.location)
                .on_input(Message::LocationChanged)
                .on_submit(Message::Save)
                .into(),
        ))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(Space::new().width(Length::Fill))
                .push(
                    button(Text::new(i18n.tr("inventory-cancel")))
                        .on_press(Message::Cancel)
                        .style(styles::button::unselected),
                )
                .push(
                    button(Text::new(i18n.tr("inventory-save")))
                        .on_press(Message::Save)
                        .style(styles::button::primary),
                ),
        );

    let dialog = Container::new(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog);

    opaque(
        mouse_area(
            Container::new(opaque(dialog))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(Message::Cancel),
    )
}
