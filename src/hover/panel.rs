// SPDX-License-Identifier: MPL-2.0
//! Info panel state and the text of its fields.
//!
//! Formatting is pure: a [`CountryRecord`] becomes a [`PanelPatch`], an
//! ordered list of field assignments that stops at the first field the
//! record cannot provide. Fields assigned before that point stay applied.

use crate::api::{CountryRecord, Currencies, FetchError};
use crate::i18n::fluent::I18n;

/// Labels and fixed words used by the panel.
///
/// Labels carry no trailing separator; a single space is inserted between a
/// label and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLabels {
    pub country: String,
    pub un_member: String,
    pub currencies: String,
    pub capitals: String,
    pub borders: String,
    pub yes: String,
    pub no: String,
    pub unknown: String,
    pub missing_symbol: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            country: "Country:".into(),
            un_member: "Member of UN:".into(),
            currencies: "Currencies:".into(),
            capitals: "Capitals:".into(),
            borders: "Borders:".into(),
            yes: "Yes".into(),
            no: "No".into(),
            unknown: "unknown".into(),
            missing_symbol: "undefined".into(),
        }
    }
}

impl PanelLabels {
    /// Reads the labels for the active locale.
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            country: i18n.tr("panel-country"),
            un_member: i18n.tr("panel-un-member"),
            currencies: i18n.tr("panel-currencies"),
            capitals: i18n.tr("panel-capitals"),
            borders: i18n.tr("panel-borders"),
            yes: i18n.tr("panel-yes"),
            no: i18n.tr("panel-no"),
            unknown: i18n.tr("panel-unknown"),
            missing_symbol: i18n.tr("panel-missing-symbol"),
        }
    }

    fn line(label: &str, value: &str) -> String {
        format!("{label} {value}")
    }

    #[must_use]
    pub fn name_text(&self, record: &CountryRecord) -> String {
        Self::line(
            &self.country,
            record.common_name().unwrap_or(self.unknown.as_str()),
        )
    }

    #[must_use]
    pub fn membership_text(&self, record: &CountryRecord) -> String {
        let answer = if record.un_member.unwrap_or(false) {
            &self.yes
        } else {
            &self.no
        };
        Self::line(&self.un_member, answer)
    }

    /// `"{code} ({symbol})"` entries in server order.
    pub fn currencies_text(&self, currencies: Option<&Currencies>) -> Result<String, FetchError> {
        let currencies = currencies.ok_or(FetchError::MissingField("currencies"))?;
        let entries = currencies
            .iter()
            .map(|(code, info)| {
                let symbol = info
                    .and_then(|c| c.symbol.as_deref())
                    .unwrap_or(self.missing_symbol.as_str());
                format!("{code} ({symbol})")
            })
            .collect::<Vec<_>>();
        Ok(Self::line(&self.currencies, &entries.join(", ")))
    }

    pub fn capitals_text(&self, capital: Option<&[String]>) -> Result<String, FetchError> {
        let capital = capital.ok_or(FetchError::MissingField("capital"))?;
        Ok(Self::line(&self.capitals, &capital.join(", ")))
    }

    pub fn borders_text(&self, borders: Option<&[String]>) -> Result<String, FetchError> {
        let borders = borders.ok_or(FetchError::MissingField("borders"))?;
        Ok(Self::line(&self.borders, &borders.join(", ")))
    }
}

/// One assignment to a panel field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Flag(Option<String>),
    Name(String),
    Membership(String),
    Currencies(String),
    Capitals(String),
    Borders(String),
}

/// Field assignments derived from one record, in application order.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPatch {
    pub updates: Vec<FieldUpdate>,
    /// Field that stopped the sequence, if any.
    pub failure: Option<FetchError>,
}

impl PanelPatch {
    /// Builds the assignments flag, name, membership, currencies, capitals,
    /// borders, stopping at the first field that cannot be produced.
    #[must_use]
    pub fn from_record(record: &CountryRecord, labels: &PanelLabels) -> Self {
        let mut updates = vec![
            FieldUpdate::Flag(record.flag.clone()),
            FieldUpdate::Name(labels.name_text(record)),
            FieldUpdate::Membership(labels.membership_text(record)),
        ];

        let failure = push_lists(&mut updates, record, labels).err();
        Self { updates, failure }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

fn push_lists(
    updates: &mut Vec<FieldUpdate>,
    record: &CountryRecord,
    labels: &PanelLabels,
) -> Result<(), FetchError> {
    updates.push(FieldUpdate::Currencies(
        labels.currencies_text(record.currencies.as_ref())?,
    ));
    updates.push(FieldUpdate::Capitals(
        labels.capitals_text(record.capital.as_deref())?,
    ));
    updates.push(FieldUpdate::Borders(
        labels.borders_text(record.borders.as_deref())?,
    ));
    Ok(())
}

/// Content of the fixed info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPanel {
    pub visible: bool,
    /// Flag source as delivered by the API (usually an image URL).
    pub flag: Option<String>,
    pub name: String,
    pub membership: String,
    pub currencies: String,
    pub capitals: String,
    pub borders: String,
}

impl InfoPanel {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Flag(flag) => self.flag = flag,
            FieldUpdate::Name(text) => self.name = text,
            FieldUpdate::Membership(text) => self.membership = text,
            FieldUpdate::Currencies(text) => self.currencies = text,
            FieldUpdate::Capitals(text) => self.capitals = text,
            FieldUpdate::Borders(text) => self.borders = text,
        }
    }

    /// Applies every assignment of `patch` in order.
    pub fn apply_patch(&mut self, patch: PanelPatch) {
        for update in patch.updates {
            self.apply(update);
        }
    }

    /// Text lines in display order, skipping fields never assigned.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [
            &self.name,
            &self.membership,
            &self.currencies,
            &self.capitals,
            &self.borders,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
    }
}
