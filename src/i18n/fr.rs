//! French translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "PowerBill Tracker".into());
    t.insert("app.welcome".into(), "Tapez 'help' pour la liste des commandes.".into());
    t.insert("app.goodbye".into(), "Au revoir.".into());
    t.insert("app.unknown_command".into(), "Commande inconnue : {command}".into());
    t.insert("app.usage".into(), "Utilisation : {usage}".into());

    // Help
    t.insert("help.title".into(), "Commandes".into());
    t.insert("help.add".into(), "add <appareil> <heures>   enregistrer ou modifier les heures par jour".into());
    t.insert("help.remove".into(), "remove <appareil>         supprimer un appareil".into());
    t.insert("help.list".into(), "list                      afficher les appareils".into());
    t.insert("help.report".into(), "report                    rapport avec co\u{00FB}ts et niveaux".into());
    t.insert("help.advice".into(), "advice [model]            \u{00E9}conomies en r\u{00E9}duisant l'usage".into());
    t.insert("help.top".into(), "top [n]                   appareils les plus utilis\u{00E9}s".into());
    t.insert("help.predict".into(), "predict <f1> <f2> <f3>    pr\u{00E9}voir la prochaine facture".into());
    t.insert("help.rates".into(), "rates                     appareils connus et tarifs".into());
    t.insert("help.quit".into(), "quit                      quitter".into());

    // Ledger
    t.insert("ledger.saved".into(), "{name} enregistr\u{00E9} : {hours} h/jour".into());
    t.insert("ledger.removed".into(), "{name} supprim\u{00E9}".into());
    t.insert("ledger.empty".into(), "Aucun appareil enregistr\u{00E9}.".into());
    t.insert("ledger.hours_per_day".into(), "h/jour".into());

    // Report
    t.insert("report.title".into(), "Rapport d'utilisation des appareils".into());
    t.insert("report.total_hours".into(), "Heures totales d'utilisation".into());
    t.insert("report.total_cost".into(), "Co\u{00FB}t journalier estim\u{00E9}".into());
    t.insert("report.share".into(), "part".into());
    t.insert("report.per_day".into(), "/jour".into());

    // Tiers
    t.insert("tier.high".into(), "Usage \u{00E9}lev\u{00E9}".into());
    t.insert("tier.moderate".into(), "Usage mod\u{00E9}r\u{00E9}".into());
    t.insert("tier.efficient".into(), "Efficace".into());

    // Advice
    t.insert("advice.title".into(), "Conseils pour r\u{00E9}duire la consommation ({basis})".into());
    t.insert("advice.line".into(), "R\u{00E9}duire {name} de {hours} h : \u{00E9}conomie de {amount} par jour".into());

    // Top consumers
    t.insert("top.title".into(), "Les {count} appareils les plus consommateurs".into());

    // Prediction
    t.insert("predict.result".into(), "Facture pr\u{00E9}vue : {amount}".into());
    t.insert("predict.trend.rising".into(), "Les factures augmentent de {amount} par mois".into());
    t.insert("predict.trend.falling".into(), "Les factures baissent de {amount} par mois".into());
    t.insert("predict.trend.stable".into(), "Les factures sont stables".into());

    // Rates
    t.insert("rates.title".into(), "Appareils connus (co\u{00FB}t par heure)".into());
    t.insert("rates.default".into(), "Tout autre appareil".into());

    // Errors
    t.insert("error.input".into(), "Erreur de saisie".into());
    t.insert("error.not_found".into(), "Introuvable".into());
    t.insert("error.no_data".into(), "Aucune donn\u{00E9}e".into());
    t.insert("error.other".into(), "Erreur".into());

    t
}
