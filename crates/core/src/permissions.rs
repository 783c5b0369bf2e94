//! Per-operation permission grants.
//!
//! Authoring operations are gated on a (role, permission) check in addition
//! to ownership. Roles carry fixed permission sets; there is no per-user
//! grant storage.

use crate::roles::{ROLE_ADMIN, ROLE_INSTRUCTOR};

/// One grantable operation on one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AddCourse,
    ChangeCourse,
    DeleteCourse,
    AddModule,
    ChangeModule,
    DeleteModule,
    AddContent,
    ChangeContent,
    DeleteContent,
    ManageTracks,
    ManageUsers,
}

/// Whether `role` carries `permission`.
///
/// - `admin` holds every permission.
/// - `instructor` holds all course/module/content authoring permissions.
/// - `student` (and any unknown role) holds none.
pub fn role_has(role: &str, permission: Permission) -> bool {
    match role {
        ROLE_ADMIN => true,
        ROLE_INSTRUCTOR => !matches!(
            permission,
            Permission::ManageTracks | Permission::ManageUsers
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ROLE_STUDENT;

    #[test]
    fn admin_has_everything() {
        assert!(role_has(ROLE_ADMIN, Permission::AddCourse));
        assert!(role_has(ROLE_ADMIN, Permission::ManageTracks));
        assert!(role_has(ROLE_ADMIN, Permission::ManageUsers));
    }

    #[test]
    fn instructor_authors_but_does_not_administer() {
        assert!(role_has(ROLE_INSTRUCTOR, Permission::AddCourse));
        assert!(role_has(ROLE_INSTRUCTOR, Permission::DeleteContent));
        assert!(!role_has(ROLE_INSTRUCTOR, Permission::ManageTracks));
        assert!(!role_has(ROLE_INSTRUCTOR, Permission::ManageUsers));
    }

    #[test]
    fn student_has_nothing() {
        assert!(!role_has(ROLE_STUDENT, Permission::AddCourse));
        assert!(!role_has(ROLE_STUDENT, Permission::ChangeModule));
    }

    #[test]
    fn unknown_role_has_nothing() {
        assert!(!role_has("janitor", Permission::AddCourse));
    }
}
