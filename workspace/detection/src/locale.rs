use common::Month;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::form::FormField;

/// Language of every user-visible string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale: {0} (expected en or pt-br)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl Locale {
    /// The single message shown for every failed submission.
    pub fn connection_error(self) -> &'static str {
        match self {
            Locale::En => "failed to connect to API",
            Locale::PtBr => "Erro ao conectar com a API.",
        }
    }

    pub fn yes_no(self, value: bool) -> &'static str {
        match (self, value) {
            (Locale::En, true) => "Yes",
            (Locale::En, false) => "No",
            (Locale::PtBr, true) => "Sim",
            (Locale::PtBr, false) => "Não",
        }
    }

    /// Category label of a historical month, `index` starting at 0.
    pub fn month_label(self, index: usize) -> String {
        match self {
            Locale::En => format!("Month {}", index + 1),
            Locale::PtBr => format!("Mês {}", index + 1),
        }
    }

    pub fn current_month_label(self) -> &'static str {
        match self {
            Locale::En => "Current Month",
            Locale::PtBr => "Mês Atual",
        }
    }

    pub fn month_name(self, month: Month) -> &'static str {
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ];
        const PT: [&str; 12] = [
            "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
            "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
        ];
        let idx = month.number() as usize - 1;
        match self {
            Locale::En => EN[idx],
            Locale::PtBr => PT[idx],
        }
    }

    pub fn field_label(self, field: FormField) -> &'static str {
        match (self, field) {
            (Locale::En, FormField::Injection) => "Monthly injection (measured kWh)",
            (Locale::En, FormField::InstalledPower) => "Installed power",
            (Locale::En, FormField::Latitude) => "Latitude",
            (Locale::En, FormField::Longitude) => "Longitude",
            (Locale::En, FormField::Month) => "Month",
            (Locale::PtBr, FormField::Injection) => "Injeção Mensal (Kwh medido)",
            (Locale::PtBr, FormField::InstalledPower) => "Potência Instalada",
            (Locale::PtBr, FormField::Latitude) => "Latitude",
            (Locale::PtBr, FormField::Longitude) => "Longitude",
            (Locale::PtBr, FormField::Month) => "Mês",
        }
    }

    pub fn form_title(self) -> &'static str {
        match self {
            Locale::En => "Anomaly Detection",
            Locale::PtBr => "Detecção de Anomalia",
        }
    }

    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Locale::En, false) => "Submit",
            (Locale::En, true) => "Sending...",
            (Locale::PtBr, false) => "Enviar",
            (Locale::PtBr, true) => "Enviando...",
        }
    }

    pub fn result_title(self) -> &'static str {
        match self {
            Locale::En => "Result:",
            Locale::PtBr => "Resultado:",
        }
    }

    pub fn general_anomaly(self) -> &'static str {
        match self {
            Locale::En => "General anomaly",
            Locale::PtBr => "Anomalia Geral",
        }
    }

    pub fn factor_anomaly(self) -> &'static str {
        match self {
            Locale::En => "Factor anomaly",
            Locale::PtBr => "Anomalia Fator",
        }
    }

    pub fn solar_anomaly(self) -> &'static str {
        match self {
            Locale::En => "Solar anomaly",
            Locale::PtBr => "Anomalia Solar",
        }
    }

    pub fn chart_title(self) -> &'static str {
        match self {
            Locale::En => "Production vs Anomalies",
            Locale::PtBr => "Gráfico de Produção vs Anomalias",
        }
    }

    pub fn production_series(self) -> &'static str {
        match self {
            Locale::En => "Production (kWh)",
            Locale::PtBr => "Produção (KWh)",
        }
    }

    pub fn three_month_average_series(self) -> &'static str {
        match self {
            Locale::En => "Last 3 months average",
            Locale::PtBr => "Média Últimos 3 Meses",
        }
    }

    pub fn regulatory_factor_series(self) -> &'static str {
        match self {
            Locale::En => "ANEEL factor (115.2)",
            Locale::PtBr => "Fator ANEEL (115.2)",
        }
    }

    pub fn solar_minimum_series(self) -> &'static str {
        match self {
            Locale::En => "Estimated solar minimum",
            Locale::PtBr => "Mínimo Solar Estimado",
        }
    }
}
