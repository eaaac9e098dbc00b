// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque modèle correspond à une table avec SeaORM.
//
// Liste des modules:
//   - utilisateur : Utilisateurs (mot de passe hashé, jamais sérialisé)
//   - conversation : Conversations d'un utilisateur
//   - message : Messages d'une conversation (sender: user | bot)
//   - erreur : Erreurs connues de la base de connaissances
//   - solution : Solutions aux erreurs
//   - outil : Outils utilisables pour corriger une erreur
//   - erreur_outil : Lien N↔N erreur/outil (clé composite)
//   - erreur_solution : Lien N↔N erreur/solution
//   - logs_interaction : Journal des actions (append-only)
//   - requete : Requêtes déposées par un utilisateur
//   - health : Réponse du health check
//
// Points d'attention:
//   - Tous les modèles utilisent SeaORM (pas de SQL brut)
//   - Le derive Serialize de chaque Model est le format JSON de l'API
//   - Toutes les clés étrangères sont en ON DELETE RESTRICT
//
// ============================================================================

pub mod utilisateur;
pub mod conversation;
pub mod message;
pub mod erreur;
pub mod solution;
pub mod outil;
pub mod erreur_outil;
pub mod erreur_solution;
pub mod logs_interaction;
pub mod requete;
pub mod health;
