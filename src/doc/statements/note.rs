/*!
# `note <note> <duration>`
Also written `tone`. Abbreviation `no`.
## Purpose
Plays a note for a number of tenths of a second.

## Example
```text
note 12 5
```

*/
