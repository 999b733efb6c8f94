// Prompt texts for topic extraction.
//
// The prompts are German because the transcripts and the UI are — the
// model answers in the language it is addressed in. The system prompt
// fixes the extraction contract (5-7 topics, "Titel: Beschreibung");
// the user prompt embeds the transcript verbatim.

/// System prompt for the tool-calling backend. Output shape is enforced
/// by the tool schema, so this only has to fix count and format.
pub const SYSTEM_PROMPT: &str = "\
Du bist ein professioneller Redakteur für Sozialarbeit und Beratung.
Analysiere das folgende Transkript eines Beratungsgesprächs und identifiziere die 5-7 wichtigsten Hauptthemen.

Formatiere jedes Thema als einen String mit diesem Muster:
\"Thementitel: Kurze Beschreibung in 1-2 Sätzen.\"

Beispiele:
- \"Cybermobbing und soziale Medien: Beleidigende Nachrichten über WhatsApp und Instagram führen zu emotionaler Belastung des Schülers.\"
- \"Schulische Probleme: Verpasste Klassenarbeit durch Fehlinformationen von Mitschülern.\"
- \"Familiäre Situation: Spannungen zwischen den Eltern werden als zusätzliche Belastung wahrgenommen.\"

Antworte NUR mit den Themen, keine Einleitung oder Erklärungen.";

/// System prompt for the direct-completion backend. No tool schema here,
/// so the output format has to be pinned down by the prompt itself.
pub const COMPLETION_SYSTEM_PROMPT: &str = "\
Du bist ein professioneller Redakteur für Sozialarbeit und Beratung.
Analysiere das folgende Transkript eines Beratungsgesprächs und identifiziere die 5-7 wichtigsten Hauptthemen.

Formatiere jedes Thema als einen String mit diesem Muster:
\"Thementitel: Kurze Beschreibung in 1-2 Sätzen.\"

Antworte AUSSCHLIESSLICH mit einem JSON-Array dieser Strings, ohne Markdown, ohne Einleitung, ohne Erklärungen.
Beispiel: [\"Thema A: Beschreibung.\", \"Thema B: Beschreibung.\"]";

/// User prompt embedding the transcript verbatim.
pub fn user_prompt(transcript: &str) -> String {
    format!("Analysiere dieses Transkript und extrahiere 5-7 Hauptthemen:\n\n{transcript}")
}
