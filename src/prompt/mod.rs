// Prompt assembly
//
// Formats the petition, the optional meeting summary and the reference
// library into the single user message sent to the model. Inputs are
// embedded verbatim: no truncation, escaping or validation.

use crate::config::constants::MEETING_PLACEHOLDER;
use crate::reference::{JurisprudenceEntry, PrecedentEntry, ReferenceLibrary, ThesisTable};

/// Instruction paragraph and the 13-point report outline
pub const ANALYSIS_INSTRUCTIONS: &str = "\
Você é um especialista jurídico. Analise o conteúdo abaixo e gere um relatório completo para defesa trabalhista empresarial contendo:

1. Nome do reclamante
2. Nome da empresa
3. Número do processo
4. Nome do advogado do reclamante
5. Resumo e detalhamento dos fatos alegados na petição inicial
6. Espelho dos cálculos apresentados
7. Relação de documentos anexados pela parte autora
8. Análise da convenção coletiva aplicável por cláusula vs pedidos
9. Jurisprudência correlata com base no TRT7, TST e precedentes
10. Risco estimado por pedido
11. Checklist de documentos a solicitar do cliente
12. Perguntas estratégicas a fazer ao cliente
13. Sugestões de defesa com base em teses padrões";

pub const PETITION_HEADING: &str = "📄 Petição inicial:";
pub const MEETING_HEADING: &str = "📌 Reunião com o cliente:";
pub const STATEMENTS_HEADING: &str = "📚 Enunciados TRT-7:";
pub const JURISPRUDENCE_HEADING: &str = "📖 Jurisprudência:";
pub const PRECEDENTS_HEADING: &str = "📌 Precedentes:";
pub const THESES_HEADING: &str = "📍 Teses padrão:";

/// Section headings in the order they appear in the prompt
pub const SECTION_HEADINGS: [&str; 6] = [
    PETITION_HEADING,
    MEETING_HEADING,
    STATEMENTS_HEADING,
    JURISPRUDENCE_HEADING,
    PRECEDENTS_HEADING,
    THESES_HEADING,
];

/// Borrowed view of everything that goes into the prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptInputs<'a> {
    pub petition: &'a str,
    /// Meeting summary; `None` or empty renders the placeholder
    pub meeting: Option<&'a str>,
    pub statements: &'a str,
    pub jurisprudence: &'a [JurisprudenceEntry],
    pub precedents: &'a [PrecedentEntry],
    pub theses: &'a ThesisTable,
}

impl<'a> PromptInputs<'a> {
    pub fn new(petition: &'a str, meeting: Option<&'a str>, library: &'a ReferenceLibrary) -> Self {
        Self {
            petition,
            meeting,
            statements: &library.statements,
            jurisprudence: &library.jurisprudence,
            precedents: &library.precedents,
            theses: &library.theses,
        }
    }
}

/// Build the analysis prompt
pub fn build_prompt(inputs: &PromptInputs<'_>) -> String {
    let meeting = match inputs.meeting {
        Some(text) if !text.is_empty() => text,
        _ => MEETING_PLACEHOLDER,
    };

    format!(
        "\n{ANALYSIS_INSTRUCTIONS}\n\n\
         {PETITION_HEADING}\n{petition}\n\n\
         {MEETING_HEADING}\n{meeting}\n\n\
         {STATEMENTS_HEADING}\n{statements}\n\n\
         {JURISPRUDENCE_HEADING}\n{jurisprudence}\n\n\
         {PRECEDENTS_HEADING}\n{precedents}\n\n\
         {THESES_HEADING}\n{theses}\n",
        petition = inputs.petition,
        statements = inputs.statements,
        jurisprudence = jurisprudence_block(inputs.jurisprudence),
        precedents = precedents_block(inputs.precedents),
        theses = theses_block(inputs.theses),
    )
}

fn jurisprudence_block(entries: &[JurisprudenceEntry]) -> String {
    entries
        .iter()
        .map(|j| format!("{} {}: {} (Link: {})", j.tipo, j.numero, j.resumo, j.link))
        .collect::<Vec<_>>()
        .join("\n")
}

fn precedents_block(entries: &[PrecedentEntry]) -> String {
    entries
        .iter()
        .map(|p| format!("Tese {}: {} (Link: {})", p.numero, p.resumo, p.link))
        .collect::<Vec<_>>()
        .join("\n")
}

fn theses_block(table: &ThesisTable) -> String {
    table
        .rows
        .iter()
        .map(|t| format!("- {}: {}", t.claim, t.defense))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Thesis;

    fn sample_library() -> ReferenceLibrary {
        ReferenceLibrary {
            statements: "Enunciado 3: horas in itinere.".to_string(),
            jurisprudence: vec![
                JurisprudenceEntry {
                    tipo: "OJ".to_string(),
                    numero: "394".to_string(),
                    resumo: "RSR majorado".to_string(),
                    link: "https://tst.jus.br/oj394".to_string(),
                },
                JurisprudenceEntry {
                    tipo: "Súmula".to_string(),
                    numero: "437".to_string(),
                    resumo: "Intervalo intrajornada".to_string(),
                    link: "https://tst.jus.br/s437".to_string(),
                },
            ],
            precedents: vec![PrecedentEntry {
                numero: "14".to_string(),
                resumo: "Dano moral coletivo".to_string(),
                link: "https://tst.jus.br/t14".to_string(),
            }],
            theses: ThesisTable {
                rows: vec![Thesis {
                    claim: "Horas extras".to_string(),
                    defense: "Cartões de ponto assinados".to_string(),
                }],
            },
        }
    }

    #[test]
    fn test_headings_appear_in_order() {
        let library = sample_library();
        let prompt = build_prompt(&PromptInputs::new("PETIÇÃO", Some("REUNIÃO"), &library));

        let mut last = prompt.find("1. Nome do reclamante").unwrap();
        let outline_end = prompt.find("13. Sugestões de defesa").unwrap();
        assert!(last < outline_end);
        last = outline_end;

        for heading in SECTION_HEADINGS {
            let pos = prompt[last..]
                .find(heading)
                .unwrap_or_else(|| panic!("missing or out of order: {heading}"));
            last += pos + heading.len();
        }
    }

    #[test]
    fn test_placeholder_when_meeting_absent() {
        let library = ReferenceLibrary::default();

        let absent = build_prompt(&PromptInputs::new("p", None, &library));
        assert!(absent.contains("📌 Reunião com o cliente:\nNão enviada\n\n"));

        let empty = build_prompt(&PromptInputs::new("p", Some(""), &library));
        assert_eq!(absent, empty);

        let given = build_prompt(&PromptInputs::new("p", Some("ata da reunião"), &library));
        assert!(given.contains("📌 Reunião com o cliente:\nata da reunião\n\n"));
        assert!(!given.contains(MEETING_PLACEHOLDER));
    }

    #[test]
    fn test_record_lines() {
        let library = sample_library();
        let prompt = build_prompt(&PromptInputs::new("p", None, &library));

        assert!(prompt.contains(
            "📖 Jurisprudência:\n\
             OJ 394: RSR majorado (Link: https://tst.jus.br/oj394)\n\
             Súmula 437: Intervalo intrajornada (Link: https://tst.jus.br/s437)\n\n"
        ));
        assert!(prompt.contains(
            "📌 Precedentes:\nTese 14: Dano moral coletivo (Link: https://tst.jus.br/t14)\n\n"
        ));
        assert!(prompt.ends_with("📍 Teses padrão:\n- Horas extras: Cartões de ponto assinados\n"));
    }

    #[test]
    fn test_exact_layout_with_empty_references() {
        let library = ReferenceLibrary::default();
        let prompt = build_prompt(&PromptInputs::new("Texto da petição", None, &library));

        let expected = format!(
            "\n{ANALYSIS_INSTRUCTIONS}\n\n\
             📄 Petição inicial:\nTexto da petição\n\n\
             📌 Reunião com o cliente:\nNão enviada\n\n\
             📚 Enunciados TRT-7:\n\n\n\
             📖 Jurisprudência:\n\n\n\
             📌 Precedentes:\n\n\n\
             📍 Teses padrão:\n\n"
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_inputs_not_escaped() {
        let library = ReferenceLibrary::default();
        let petition = "{braces} \"quotes\" \\ {{double}}";
        let prompt = build_prompt(&PromptInputs::new(petition, None, &library));
        assert!(prompt.contains(petition));
    }
}
