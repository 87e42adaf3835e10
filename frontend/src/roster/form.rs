use common::requests::NewPlayerRequest;

/// One of the creation form's text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Breed,
    Team,
    ImageUrl,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Breed,
        FormField::Team,
        FormField::ImageUrl,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Enter player name",
            FormField::Breed => "Enter player breed",
            FormField::Team => "Enter player team",
            FormField::ImageUrl => "Enter player image URL",
        }
    }
}

/// Raw values of the creation form. Nothing is trimmed or validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPlayerForm {
    pub name: String,
    pub breed: String,
    pub team: String,
    pub image_url: String,
}

impl NewPlayerForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Breed => &self.breed,
            FormField::Team => &self.team,
            FormField::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Breed => self.breed = value,
            FormField::Team => self.team = value,
            FormField::ImageUrl => self.image_url = value,
        }
    }

    pub fn to_request(&self) -> NewPlayerRequest {
        NewPlayerRequest {
            name: self.name.clone(),
            breed: self.breed.clone(),
            team_id: self.team.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.value(*field).is_empty())
    }
}
