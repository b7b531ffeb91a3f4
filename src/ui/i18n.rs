use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Italian];

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Italian => "Italiano",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Italian => &ITALIAN,
        }
    }
}

/// Every user-visible string the views need. Passed down by reference
/// from the app's settings.
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub new_game: &'static str,
    pub game_name: &'static str,
    pub start_new_game: &'static str,
    pub load_game: &'static str,
    pub load_selected: &'static str,
    pub no_saved_games: &'static str,
    pub games_folder: &'static str,
    pub choose_folder: &'static str,
    pub refresh: &'static str,
    pub close_game: &'static str,

    pub controls: &'static str,
    pub select_state: &'static str,
    pub next_state: &'static str,
    pub enter_number: &'static str,
    pub add_number: &'static str,
    pub remove_number: &'static str,
    pub draw_number: &'static str,
    pub save_game: &'static str,
    pub grid_view: &'static str,
    pub list_view: &'static str,
    pub called_numbers: &'static str,
    pub remaining_numbers: &'static str,
    pub statistics: &'static str,
    pub total_called: &'static str,
    pub numbers_remaining: &'static str,
    pub completion: &'static str,
    pub action_log: &'static str,

    pub state: &'static str,
    pub last_number: &'static str,
    pub board_title: &'static str,
    pub console_title: &'static str,

    pub settings: &'static str,
    pub ui_scale: &'static str,
    pub dark_mode: &'static str,
    pub language: &'static str,
    pub colors: &'static str,
    pub last_called_color: &'static str,
    pub called_color: &'static str,
    pub uncalled_color: &'static str,
    pub dismiss: &'static str,
    pub saved: &'static str,
}

static ENGLISH: Labels = Labels {
    app_title: "Tombola Manager",
    new_game: "New Game",
    game_name: "Game Name:",
    start_new_game: "Start New Game",
    load_game: "Load Game",
    load_selected: "Load Selected Game",
    no_saved_games: "No saved games yet.",
    games_folder: "Games folder:",
    choose_folder: "Choose…",
    refresh: "Refresh",
    close_game: "Close Game",

    controls: "Controls",
    select_state: "Select State:",
    next_state: "Next prize",
    enter_number: "Enter number:",
    add_number: "Add Number",
    remove_number: "Remove Number",
    draw_number: "Draw Random",
    save_game: "Save Game",
    grid_view: "Grid View",
    list_view: "List View",
    called_numbers: "Called Numbers",
    remaining_numbers: "Remaining Numbers",
    statistics: "Statistics",
    total_called: "Total Numbers Called:",
    numbers_remaining: "Numbers Remaining:",
    completion: "Completion Percentage:",
    action_log: "Action Log",

    state: "State",
    last_number: "Last number",
    board_title: "Tombola View",
    console_title: "Tombola Control",

    settings: "Settings",
    ui_scale: "UI Scale",
    dark_mode: "Dark mode",
    language: "Language",
    colors: "Board colours",
    last_called_color: "Last called",
    called_color: "Called",
    uncalled_color: "Not called",
    dismiss: "Dismiss",
    saved: "Game saved",
};

static ITALIAN: Labels = Labels {
    app_title: "Gestore Tombola",
    new_game: "Nuova Partita",
    game_name: "Nome Partita:",
    start_new_game: "Inizia Nuova Partita",
    load_game: "Carica Partita",
    load_selected: "Carica Partita Selezionata",
    no_saved_games: "Nessuna partita salvata.",
    games_folder: "Cartella partite:",
    choose_folder: "Scegli…",
    refresh: "Aggiorna",
    close_game: "Chiudi Partita",

    controls: "Controlli",
    select_state: "Seleziona Stato:",
    next_state: "Premio successivo",
    enter_number: "Inserisci numero:",
    add_number: "Aggiungi Numero",
    remove_number: "Rimuovi Numero",
    draw_number: "Estrai a Caso",
    save_game: "Salva Partita",
    grid_view: "Griglia",
    list_view: "Elenco",
    called_numbers: "Numeri Estratti",
    remaining_numbers: "Numeri Rimanenti",
    statistics: "Statistiche",
    total_called: "Numeri Estratti:",
    numbers_remaining: "Numeri Rimanenti:",
    completion: "Percentuale Completamento:",
    action_log: "Registro Azioni",

    state: "Stato",
    last_number: "Ultimo numero",
    board_title: "Tombola Tabellone",
    console_title: "Tombola Controllo",

    settings: "Impostazioni",
    ui_scale: "Scala interfaccia",
    dark_mode: "Tema scuro",
    language: "Lingua",
    colors: "Colori tabellone",
    last_called_color: "Ultimo estratto",
    called_color: "Estratto",
    uncalled_color: "Non estratto",
    dismiss: "Chiudi",
    saved: "Partita salvata",
};
